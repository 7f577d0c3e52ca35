use super::*;

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Navbar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    pub items: Vec<NavbarItem>,
}

impl Navbar {
    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(logo) = &self.logo {
            if logo.src.as_str().is_empty() {
                return Err(Status::new("`navbar.logo.src` must not be empty"));
            }
        }
        for item in &self.items {
            if let NavbarItem::External(item) = item {
                validate_href(&item.href)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Logo {
    #[serde(default)]
    pub alt: String,
    pub src: RelPath,
}

/// One navbar entry.
///
/// Entries are polymorphic over their `type` field; the typed variants each
/// require different companion fields, and entries without a `type` are plain
/// links, internal (`to`) or external (`href`).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub enum NavbarItem {
    DocSidebar(DocSidebarItem),
    LocaleDropdown(LocaleDropdownItem),
    Page(PageLinkItem),
    External(ExternalLinkItem),
}

impl NavbarItem {
    pub fn position(&self) -> Position {
        match self {
            NavbarItem::DocSidebar(item) => item.position,
            NavbarItem::LocaleDropdown(item) => item.position,
            NavbarItem::Page(item) => item.position,
            NavbarItem::External(item) => item.position,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            NavbarItem::DocSidebar(item) => item.label.as_deref(),
            NavbarItem::LocaleDropdown(_) => None,
            NavbarItem::Page(item) => Some(&item.label),
            NavbarItem::External(item) => Some(&item.label),
        }
    }
}

/// A link to the first document of a named sidebar.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct DocSidebarItem {
    #[serde(rename = "type")]
    pub kind: DocSidebarTag,
    pub sidebar_id: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocSidebarTag {
    DocSidebar,
}

/// A dropdown for switching between configured locales.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct LocaleDropdownItem {
    #[serde(rename = "type")]
    pub kind: LocaleDropdownTag,
    #[serde(default)]
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocaleDropdownTag {
    LocaleDropdown,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct PageLinkItem {
    pub to: RoutePath,
    pub label: String,
    #[serde(default)]
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct ExternalLinkItem {
    pub href: String,
    pub label: String,
    #[serde(default)]
    pub position: Position,
}

#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
#[derive(Default)]
pub enum Position {
    #[default]
    Left,
    Right,
}

pub(crate) fn validate_href(href: &str) -> Result<()> {
    if href.starts_with("http://") || href.starts_with("https://") {
        Ok(())
    } else {
        Err(Status::new("`href` must be an absolute URL")
            .context_with(|c| c.insert("href", href.to_owned())))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn doc_sidebar_item() {
        let item: NavbarItem = serde_yaml::from_str(
            "
type: doc_sidebar
sidebar_id: tutorial
label: Documentation
",
        )
        .unwrap();
        let NavbarItem::DocSidebar(item) = item else {
            panic!("expected a doc_sidebar item, got {item:?}");
        };
        assert_eq!(item.sidebar_id, "tutorial");
        assert_eq!(item.label.as_deref(), Some("Documentation"));
        assert_eq!(item.position, Position::Left);
    }

    #[test]
    fn locale_dropdown_item() {
        let item: NavbarItem = serde_yaml::from_str(
            "
type: locale_dropdown
position: right
",
        )
        .unwrap();
        let NavbarItem::LocaleDropdown(item) = item else {
            panic!("expected a locale_dropdown item, got {item:?}");
        };
        assert_eq!(item.position, Position::Right);
    }

    #[test]
    fn page_link_item() {
        let item: NavbarItem = serde_yaml::from_str("{ to: /blog, label: Blog }").unwrap();
        let NavbarItem::Page(item) = item else {
            panic!("expected a page link, got {item:?}");
        };
        assert_eq!(item.to.as_str(), "/blog");
        assert_eq!(item.label, "Blog");
    }

    #[test]
    fn external_link_item() {
        let item: NavbarItem = serde_yaml::from_str(
            "{ href: 'https://github.com/docfold/docfold', label: GitHub, position: right }",
        )
        .unwrap();
        let NavbarItem::External(item) = item else {
            panic!("expected an external link, got {item:?}");
        };
        assert_eq!(item.label, "GitHub");
        assert_eq!(item.position, Position::Right);
    }

    #[test]
    fn relative_href_rejected() {
        let navbar = Navbar {
            items: vec![NavbarItem::External(ExternalLinkItem {
                href: "github.com/docfold".into(),
                label: "GitHub".into(),
                position: Position::Right,
            })],
            ..Default::default()
        };
        assert!(navbar.validate().is_err());
    }
}
