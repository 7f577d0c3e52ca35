use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context as _;
use anyhow::Result;
use docfold_config::BlogOptions;
use docfold_config::Config;
use docfold_config::Document;
use docfold_config::FooterLink;
use docfold_config::NavbarItem;
use docfold_config::RelPath;
use docfold_config::ReportLevel;

use crate::site::SiteTree;
use crate::site::TRUNCATE_MARKER;

#[derive(Debug)]
pub struct Issue {
    pub level: ReportLevel,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct Report {
    issues: Vec<Issue>,
}

impl Report {
    fn push(&mut self, level: ReportLevel, message: String) {
        if level == ReportLevel::Ignore {
            return;
        }
        self.issues.push(Issue { level, message });
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn fatal_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.level == ReportLevel::Throw)
            .count()
    }

    /// Surface every finding at its configured level.
    pub fn log(&self) {
        for issue in &self.issues {
            match issue.level {
                ReportLevel::Throw => log::error!("{}", issue.message),
                ReportLevel::Warn => log::warn!("{}", issue.message),
                ReportLevel::Log => log::info!("{}", issue.message),
                ReportLevel::Ignore => {}
                _ => log::warn!("{}", issue.message),
            }
        }
    }
}

/// Resolve every reference the configuration makes against the site tree.
///
/// Broken internal links surface at the `on_broken_links` level; blog
/// findings surface at the levels configured on the blog preset options.
pub fn check(config: &Config, site: &SiteTree) -> Result<Report> {
    let mut report = Report::default();
    let broken = config.on_broken_links;

    for item in &config.theme.navbar.items {
        match item {
            NavbarItem::Page(item) => {
                if !site.routes.contains(item.to.as_str()) {
                    report.push(
                        broken,
                        format!("navbar link `{}` does not resolve to a document", item.to),
                    );
                }
            }
            NavbarItem::DocSidebar(item) => {
                if !site.sidebars.contains(&item.sidebar_id) {
                    report.push(
                        broken,
                        format!("navbar references undefined sidebar `{}`", item.sidebar_id),
                    );
                }
            }
            _ => {}
        }
    }

    for group in &config.theme.footer.links {
        for link in &group.items {
            if let FooterLink::Page { label, to } = link {
                if !site.routes.contains(to.as_str()) {
                    report.push(
                        broken,
                        format!("footer link `{label}` points at `{to}`, which does not resolve"),
                    );
                }
            }
        }
    }

    let mut wanted_assets: Vec<(&str, &RelPath)> = vec![("favicon", &config.favicon)];
    if let Some(image) = &config.theme.image {
        wanted_assets.push(("theme.image", image));
    }
    if let Some(logo) = &config.theme.navbar.logo {
        wanted_assets.push(("navbar.logo.src", &logo.src));
    }
    for (what, rel) in wanted_assets {
        if !site.assets.contains(rel.as_str()) {
            report.push(
                broken,
                format!("`{what}` asset `{rel}` is missing from `static/`"),
            );
        }
    }

    if let Some(blog) = config.classic().and_then(|c| c.blog.as_ref()) {
        check_blog(&config.root, site, blog, &mut report)?;
    }

    Ok(report)
}

fn check_blog(
    root: &Path,
    site: &SiteTree,
    blog: &BlogOptions,
    report: &mut Report,
) -> Result<()> {
    let tags = load_keys(&root.join("blog").join("tags.yml"))?;
    let authors = load_keys(&root.join("blog").join("authors.yml"))?;

    for post in &site.blog_posts {
        let content = std::fs::read_to_string(post)
            .with_context(|| format!("Failed to read `{}`", post.display()))?;
        let doc = Document::parse(&content)
            .with_context(|| format!("Failed to parse `{}`", post.display()))?;
        let name = post
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| post.display().to_string());

        if !doc.content().contains(TRUNCATE_MARKER) {
            report.push(
                blog.on_untruncated_blog_posts,
                format!("blog post `{name}` has no `{TRUNCATE_MARKER}` marker"),
            );
        }
        for tag in &doc.front().tags {
            if !tags.contains(tag) {
                report.push(
                    blog.on_inline_tags,
                    format!("blog post `{name}` uses tag `{tag}` not declared in tags.yml"),
                );
            }
        }
        for author in &doc.front().authors {
            if !authors.contains(author) {
                report.push(
                    blog.on_inline_authors,
                    format!("blog post `{name}` uses author `{author}` not declared in authors.yml"),
                );
            }
        }
    }
    Ok(())
}

/// Top-level keys of a YAML mapping file; an absent file declares nothing.
fn load_keys(path: &Path) -> Result<BTreeSet<String>> {
    if !path.is_file() {
        return Ok(BTreeSet::new());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read `{}`", path.display()))?;
    let map: std::collections::BTreeMap<String, serde_yaml::Value> =
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse `{}`", path.display()))?;
    Ok(map.into_keys().collect())
}
