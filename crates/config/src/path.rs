use std::fmt;

/// An internal route reference, like `/docs/intro`.
///
/// Routes are site-absolute: they are resolved against the site's document
/// tree rather than the filesystem.
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[repr(transparent)]
#[serde(try_from = "String")]
pub struct RoutePath(String);

impl RoutePath {
    pub fn from_unchecked(value: &str) -> Self {
        Self(value.to_owned())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(fmt)
    }
}

impl TryFrom<&str> for RoutePath {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if !value.starts_with('/') {
            Err("internal links must be absolute routes")
        } else {
            Ok(Self(value.to_owned()))
        }
    }
}

impl TryFrom<String> for RoutePath {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.as_str();
        Self::try_from(value)
    }
}

impl std::ops::Deref for RoutePath {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for RoutePath {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// The pathname under which the site is served, like `/` or `/my-project/`.
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[repr(transparent)]
#[serde(try_from = "String")]
pub struct BaseUrl(String);

impl BaseUrl {
    pub fn from_unchecked(value: &str) -> Self {
        Self(value.to_owned())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Resolve a site-absolute route against the base url.
    ///
    /// Joining is idempotent under normalization: duplicate separators
    /// introduced by the concatenation are collapsed, so `/` joined with `/`
    /// is `/`.
    pub fn join(&self, route: &str) -> String {
        let mut joined = format!("{}/{}", self.0, route);
        while joined.contains("//") {
            joined = joined.replace("//", "/");
        }
        joined
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self("/".to_owned())
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(fmt)
    }
}

impl TryFrom<&str> for BaseUrl {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if !value.starts_with('/') {
            Err("`base_url` must start with `/`")
        } else if !value.ends_with('/') {
            Err("`base_url` must end with `/`")
        } else {
            Ok(Self(value.to_owned()))
        }
    }
}

impl TryFrom<String> for BaseUrl {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.as_str();
        Self::try_from(value)
    }
}

impl AsRef<str> for BaseUrl {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A language/region identifier for one translation of the site.
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[repr(transparent)]
#[serde(try_from = "String")]
pub struct LocaleCode(String);

static LOCALE_CODE: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
    regex::Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{1,8})*$").unwrap()
});

impl LocaleCode {
    pub fn from_unchecked(value: &str) -> Self {
        Self(value.to_owned())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(fmt)
    }
}

impl TryFrom<&str> for LocaleCode {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if !LOCALE_CODE.is_match(value) {
            Err("not a valid locale code")
        } else {
            Ok(Self(value.to_owned()))
        }
    }
}

impl TryFrom<String> for LocaleCode {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.as_str();
        Self::try_from(value)
    }
}

impl AsRef<str> for LocaleCode {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A relative path to a static asset, like `img/favicon.ico`.
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[repr(transparent)]
#[serde(try_from = "String")]
pub struct RelPath(relative_path::RelativePathBuf);

impl RelPath {
    pub fn new() -> Self {
        Self(relative_path::RelativePathBuf::new())
    }

    pub fn from_unchecked(value: &str) -> Self {
        Self(relative_path::RelativePathBuf::from(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_relative_path(&self) -> &relative_path::RelativePath {
        self.0.as_relative_path()
    }
}

impl fmt::Display for RelPath {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(fmt)
    }
}

impl TryFrom<&str> for RelPath {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.starts_with('/') {
            Err("asset paths must be relative")
        } else {
            Ok(Self(relative_path::RelativePathBuf::from(value)))
        }
    }
}

impl TryFrom<String> for RelPath {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.as_str();
        Self::try_from(value)
    }
}

impl AsRef<relative_path::RelativePath> for RelPath {
    #[inline]
    fn as_ref(&self) -> &relative_path::RelativePath {
        self.as_relative_path()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn route_path_absolute() {
        let actual = RoutePath::try_from("/docs/intro").unwrap();
        assert_eq!(actual.as_str(), "/docs/intro");
    }

    #[test]
    fn route_path_relative() {
        let actual = RoutePath::try_from("docs/intro");
        assert!(actual.is_err());
    }

    #[test]
    fn base_url_root() {
        let actual = BaseUrl::try_from("/").unwrap();
        assert_eq!(actual.as_str(), "/");
    }

    #[test]
    fn base_url_nested() {
        let actual = BaseUrl::try_from("/my-project/").unwrap();
        assert_eq!(actual.as_str(), "/my-project/");
    }

    #[test]
    fn base_url_missing_leading_slash() {
        assert!(BaseUrl::try_from("my-project/").is_err());
    }

    #[test]
    fn base_url_missing_trailing_slash() {
        assert!(BaseUrl::try_from("/my-project").is_err());
    }

    #[test]
    fn base_url_join_root() {
        let base = BaseUrl::try_from("/").unwrap();
        assert_eq!(base.join("/"), "/");
    }

    #[test]
    fn base_url_join_route() {
        let base = BaseUrl::try_from("/my-project/").unwrap();
        assert_eq!(base.join("/docs/intro"), "/my-project/docs/intro");
    }

    #[test]
    fn base_url_join_idempotent() {
        let base = BaseUrl::try_from("/").unwrap();
        let once = base.join("/docs/intro");
        let base = BaseUrl::from_unchecked(&base.join("/"));
        assert_eq!(base.join("/docs/intro"), once);
    }

    #[test]
    fn locale_code_simple() {
        assert!(LocaleCode::try_from("en").is_ok());
        assert!(LocaleCode::try_from("ja").is_ok());
    }

    #[test]
    fn locale_code_with_region() {
        assert!(LocaleCode::try_from("pt-BR").is_ok());
        assert!(LocaleCode::try_from("zh-Hans").is_ok());
    }

    #[test]
    fn locale_code_invalid() {
        assert!(LocaleCode::try_from("").is_err());
        assert!(LocaleCode::try_from("english language").is_err());
    }

    #[test]
    fn rel_path_relative() {
        let actual = RelPath::try_from("img/favicon.ico").unwrap();
        assert_eq!(actual.as_str(), "img/favicon.ico");
    }

    #[test]
    fn rel_path_absolute() {
        assert!(RelPath::try_from("/img/favicon.ico").is_err());
    }
}
