use std::fmt;
use std::path;

use super::*;

pub const PROJECT_FILE: &str = "_docfold.yml";

/// The site configuration: one declarative record describing metadata,
/// locales, presets, navigation, and highlighting.
///
/// Constructed once per build invocation and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Config {
    #[serde(skip)]
    pub root: path::PathBuf,
    pub title: String,
    pub tagline: String,
    pub favicon: RelPath,
    pub future: Future,
    /// Production URL of the site; must be absolute.
    pub url: String,
    pub base_url: BaseUrl,
    pub organization_name: String,
    pub project_name: String,
    pub on_broken_links: ReportLevel,
    pub i18n: I18n,
    pub presets: Vec<Preset>,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            root: Default::default(),
            title: "My Site".into(),
            tagline: "Documentation".into(),
            favicon: RelPath::from_unchecked("img/favicon.ico"),
            future: Default::default(),
            url: "https://example.com".into(),
            base_url: Default::default(),
            organization_name: Default::default(),
            project_name: Default::default(),
            on_broken_links: ReportLevel::Throw,
            i18n: Default::default(),
            presets: Default::default(),
            theme: Default::default(),
        }
    }
}

impl Config {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Config> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<Config> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let mut config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| {
                Status::new("Failed to parse config")
                    .with_source(e)
                    .context_with(|c| c.insert("Path", path.display().to_string()))
            })?
        };

        let mut root = path;
        root.pop(); // Remove filename
        if root == std::path::Path::new("") {
            root = std::path::Path::new(".").to_owned();
        }
        config.root = root;

        Ok(config)
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<Config> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<Config> {
        let file_path = find_project_file(&cwd, PROJECT_FILE);
        let config = file_path
            .map(|p| {
                log::debug!("Using config file `{}`", p.display());
                Self::from_file(&p)
            })
            .unwrap_or_else(|| {
                log::warn!(
                    "No {PROJECT_FILE} file found in current directory, using default config."
                );
                let config = Config {
                    root: cwd,
                    ..Default::default()
                };
                Ok(config)
            })?;
        Ok(config)
    }

    /// Check every schema-level invariant that does not require the site's
    /// document tree.
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(Status::new("`title` must not be empty"));
        }
        if self.tagline.is_empty() {
            return Err(Status::new("`tagline` must not be empty"));
        }
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(Status::new("`url` must be an absolute URL")
                .context_with(|c| c.insert("url", self.url.clone())));
        }
        self.i18n.validate()?;
        for preset in &self.presets {
            preset.validate()?;
        }
        self.theme.validate()?;
        Ok(())
    }

    /// The options of the `classic` preset, if it is enabled.
    pub fn classic(&self) -> Option<&ClassicOptions> {
        self.presets
            .iter()
            .find(|p| p.name() == PresetName::Classic)
            .and_then(|p| p.options())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

/// Opt-in flags for behavior that becomes the default in the next major
/// version.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Future {
    pub v4: bool,
}

/// How the build surfaces a class of findings.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub enum ReportLevel {
    /// Drop the finding.
    Ignore,
    /// Surface it as an informational diagnostic.
    Log,
    /// Surface it as a warning; the build still succeeds.
    Warn,
    /// Abort the build.
    Throw,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Theme {
    /// Social card image, relative to the static asset root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<RelPath>,
    pub color_mode: ColorMode,
    pub navbar: Navbar,
    pub footer: Footer,
    pub syntax_highlight: SyntaxHighlight,
}

impl Theme {
    pub(crate) fn validate(&self) -> Result<()> {
        self.navbar.validate()?;
        self.footer.validate()?;
        self.syntax_highlight.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct ColorMode {
    pub respect_prefers_color_scheme: bool,
}

fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_file_ok() {
        let result = Config::from_file("tests/fixtures/config/_docfold.yml").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
        assert_eq!(result.title, "FORMIX");
        assert_eq!(result.on_broken_links, ReportLevel::Throw);
        assert_eq!(result.i18n.locales.len(), 2);
        assert_eq!(result.theme.navbar.items.len(), 4);
        assert_eq!(result.theme.footer.links.len(), 3);
        result.validate().unwrap();
    }

    #[test]
    fn test_from_file_alternate_name() {
        let result = Config::from_file("tests/fixtures/config/alternate.yml").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
    }

    #[test]
    fn test_from_file_empty() {
        let result = Config::from_file("tests/fixtures/config/empty.yml").unwrap();
        assert_eq!(result, Config {
            root: path::Path::new("tests/fixtures/config").to_path_buf(),
            ..Default::default()
        });
    }

    #[test]
    fn test_from_file_invalid_syntax() {
        let result = Config::from_file("tests/fixtures/config/invalid_syntax.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_not_found() {
        let result = Config::from_file("tests/fixtures/config/config_does_not_exist.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_cwd_ok() {
        let result = Config::from_cwd("tests/fixtures/config/child").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
    }

    #[test]
    fn find_project_file_same_dir() {
        let actual = find_project_file("tests/fixtures/config", PROJECT_FILE).unwrap();
        let expected = path::Path::new("tests/fixtures/config/_docfold.yml");
        assert_eq!(actual, expected);
    }

    #[test]
    fn find_project_file_parent_dir() {
        let actual = find_project_file("tests/fixtures/config/child", PROJECT_FILE).unwrap();
        let expected = path::Path::new("tests/fixtures/config/_docfold.yml");
        assert_eq!(actual, expected);
    }

    #[test]
    fn default_is_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn validate_empty_title() {
        let config = Config {
            title: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_relative_url() {
        let config = Config {
            url: "example.com".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_default_locale_absent() {
        let config = Config {
            i18n: I18n {
                default_locale: LocaleCode::from_unchecked("fr"),
                locales: vec![
                    LocaleCode::from_unchecked("en"),
                    LocaleCode::from_unchecked("ja"),
                ],
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn classic_options_found() {
        let config = Config::from_file("tests/fixtures/config/_docfold.yml").unwrap();
        let classic = config.classic().unwrap();
        assert_eq!(
            classic
                .docs
                .as_ref()
                .unwrap()
                .sidebar_path
                .as_ref()
                .unwrap()
                .as_str(),
            "_sidebars.yml"
        );
    }

    #[test]
    fn roundtrip_display() {
        let config = Config::from_file("tests/fixtures/config/_docfold.yml").unwrap();
        let reparsed: Config = serde_yaml::from_str(&config.to_string()).unwrap();
        let reparsed = Config {
            root: config.root.clone(),
            ..reparsed
        };
        assert_eq!(reparsed, config);
    }
}
