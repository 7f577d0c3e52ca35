use itertools::Itertools;

use super::*;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct I18n {
    pub default_locale: LocaleCode,
    pub locales: Vec<LocaleCode>,
}

impl I18n {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.locales.is_empty() {
            return Err(Status::new("`locales` must not be empty"));
        }
        if !self.locales.iter().all_unique() {
            return Err(Status::new("`locales` must not repeat a locale code"));
        }
        if !self.locales.contains(&self.default_locale) {
            return Err(
                Status::new("`default_locale` is not a member of `locales`").context_with(|c| {
                    c.insert("default_locale", self.default_locale.to_string())
                }),
            );
        }
        Ok(())
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self {
            default_locale: LocaleCode::from_unchecked("en"),
            locales: vec![LocaleCode::from_unchecked("en")],
        }
    }
}
