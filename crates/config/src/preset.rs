use super::*;

/// One preset entry: either a bare name or a `(name, options)` pair.
///
/// Entries are kept in declaration order; the generator wires them up in the
/// order given.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub enum Preset {
    Bare(PresetName),
    Configured(PresetName, ClassicOptions),
}

impl Preset {
    pub fn name(&self) -> PresetName {
        match self {
            Preset::Bare(name) => *name,
            Preset::Configured(name, _) => *name,
        }
    }

    pub fn options(&self) -> Option<&ClassicOptions> {
        match self {
            Preset::Bare(_) => None,
            Preset::Configured(_, options) => Some(options),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.name() == PresetName::Unknown {
            return Err(Status::new("unrecognized preset name"));
        }
        Ok(())
    }
}

#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub enum PresetName {
    Classic,
    #[doc(hidden)]
    #[serde(other)]
    Unknown,
}

/// Options accepted by the `classic` preset.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct ClassicOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<DocsOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<BlogOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct DocsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_path: Option<RelPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct BlogOptions {
    pub show_reading_time: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed: Option<FeedOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
    pub on_inline_tags: ReportLevel,
    pub on_inline_authors: ReportLevel,
    pub on_untruncated_blog_posts: ReportLevel,
}

impl Default for BlogOptions {
    fn default() -> Self {
        Self {
            show_reading_time: true,
            feed: Default::default(),
            edit_url: Default::default(),
            on_inline_tags: ReportLevel::Warn,
            on_inline_authors: ReportLevel::Warn,
            on_untruncated_blog_posts: ReportLevel::Warn,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct FeedOptions {
    pub types: Vec<FeedType>,
    pub xslt: bool,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            types: vec![FeedType::Rss, FeedType::Atom],
            xslt: false,
        }
    }
}

#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub enum FeedType {
    Rss,
    Atom,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct ThemeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<RelPath>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bare_preset() {
        let preset: Preset = serde_yaml::from_str("classic").unwrap();
        assert_eq!(preset.name(), PresetName::Classic);
        assert!(preset.options().is_none());
        preset.validate().unwrap();
    }

    #[test]
    fn configured_preset() {
        let preset: Preset = serde_yaml::from_str(
            "
- classic
- docs:
    sidebar_path: _sidebars.yml
  blog:
    show_reading_time: true
    on_inline_tags: warn
",
        )
        .unwrap();
        assert_eq!(preset.name(), PresetName::Classic);
        let options = preset.options().unwrap();
        assert_eq!(
            options.docs.as_ref().unwrap().sidebar_path,
            Some(RelPath::from_unchecked("_sidebars.yml"))
        );
        let blog = options.blog.as_ref().unwrap();
        assert!(blog.show_reading_time);
        assert_eq!(blog.on_inline_tags, ReportLevel::Warn);
        assert_eq!(blog.on_untruncated_blog_posts, ReportLevel::Warn);
    }

    #[test]
    fn unknown_preset_rejected_by_validate() {
        let preset: Preset = serde_yaml::from_str("brutalist").unwrap();
        assert_eq!(preset.name(), PresetName::Unknown);
        assert!(preset.validate().is_err());
    }

    #[test]
    fn blog_policies_default_to_warn() {
        let blog = BlogOptions::default();
        assert_eq!(blog.on_inline_tags, ReportLevel::Warn);
        assert_eq!(blog.on_inline_authors, ReportLevel::Warn);
        assert_eq!(blog.on_untruncated_blog_posts, ReportLevel::Warn);
    }
}
