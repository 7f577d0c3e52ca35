use super::*;

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Footer {
    pub style: FooterStyle,
    pub links: Vec<LinkGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl Footer {
    pub(crate) fn validate(&self) -> Result<()> {
        for group in &self.links {
            if group.title.is_empty() {
                return Err(Status::new("footer link groups must have a title"));
            }
            for link in &group.items {
                if let FooterLink::External { href, .. } = link {
                    validate_href(href)?;
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
#[derive(Default)]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

/// A titled group of footer links, rendered as one column.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct LinkGroup {
    pub title: String,
    #[serde(default)]
    pub items: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub enum FooterLink {
    Page { label: String, to: RoutePath },
    External { label: String, href: String },
}

impl FooterLink {
    pub fn label(&self) -> &str {
        match self {
            FooterLink::Page { label, .. } => label,
            FooterLink::External { label, .. } => label,
        }
    }
}
