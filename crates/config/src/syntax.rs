use super::*;

/// Code-block highlighting selection: one theme per color mode plus the
/// grammars to load on top of the always-available defaults.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SyntaxHighlight {
    pub theme: String,
    pub dark_theme: String,
    pub additional_languages: Vec<String>,
}

impl SyntaxHighlight {
    pub(crate) fn validate(&self) -> Result<()> {
        for theme in [&self.theme, &self.dark_theme] {
            if !is_known_theme(theme) {
                return Err(Status::new("unrecognized highlighter theme")
                    .context_with(|c| c.insert("theme", theme.clone())));
            }
        }
        for language in &self.additional_languages {
            if !is_known_language(language) {
                return Err(Status::new("unrecognized highlighter grammar")
                    .context_with(|c| c.insert("language", language.clone())));
            }
        }
        Ok(())
    }
}

impl Default for SyntaxHighlight {
    fn default() -> Self {
        Self {
            theme: "github".into(),
            dark_theme: "dracula".into(),
            additional_languages: Vec::new(),
        }
    }
}

// Both tables are sorted for `binary_search`.
const KNOWN_THEMES: &[&str] = &[
    "dracula",
    "duotone-dark",
    "duotone-light",
    "github",
    "night-owl",
    "nord",
    "oceanic-next",
    "okaidia",
    "one-dark",
    "one-light",
    "palenight",
    "shades-of-purple",
    "synthwave-84",
    "ultramin",
    "vs-dark",
    "vs-light",
];

const KNOWN_LANGUAGES: &[&str] = &[
    "bash",
    "c",
    "clike",
    "cpp",
    "csharp",
    "css",
    "diff",
    "docker",
    "elixir",
    "erlang",
    "go",
    "graphql",
    "haskell",
    "ini",
    "java",
    "javascript",
    "json",
    "jsx",
    "kotlin",
    "lua",
    "markdown",
    "markup",
    "nginx",
    "perl",
    "php",
    "powershell",
    "protobuf",
    "python",
    "r",
    "ruby",
    "rust",
    "scala",
    "scss",
    "sql",
    "swift",
    "toml",
    "tsx",
    "typescript",
    "yaml",
    "zig",
];

pub fn is_known_theme(name: &str) -> bool {
    KNOWN_THEMES.binary_search(&name).is_ok()
}

pub fn is_known_language(token: &str) -> bool {
    KNOWN_LANGUAGES.binary_search(&token).is_ok()
}

pub fn themes() -> impl Iterator<Item = &'static str> {
    KNOWN_THEMES.iter().copied()
}

pub fn languages() -> impl Iterator<Item = &'static str> {
    KNOWN_LANGUAGES.iter().copied()
}
