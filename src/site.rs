use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context as _;
use anyhow::Result;
use docfold_config::Config;

/// Sidebar definitions live next to the config file unless the `classic`
/// preset points somewhere else.
pub const SIDEBARS_FILE: &str = "_sidebars.yml";

pub const TRUNCATE_MARKER: &str = "<!-- truncate -->";

/// Everything a project root offers for references to resolve against:
/// document routes, sidebar ids, and static assets.
#[derive(Debug, Default)]
pub struct SiteTree {
    pub routes: BTreeSet<String>,
    pub sidebars: BTreeSet<String>,
    pub assets: BTreeSet<String>,
    pub blog_posts: Vec<PathBuf>,
}

impl SiteTree {
    pub fn scan(config: &Config) -> Result<Self> {
        let root = config.root.as_path();
        let mut site = Self::default();

        let docs = root.join("docs");
        for rel in walk_documents(&docs)? {
            if let Some(route) = route_for(&["docs"], &rel) {
                site.routes.insert(route);
            }
        }

        let blog = root.join("blog");
        if blog.is_dir() {
            site.routes.insert("/blog".to_owned());
            for rel in walk_documents(&blog)? {
                let path = rel.to_path(&blog);
                if let Some(route) = blog_route_for(&rel) {
                    site.routes.insert(route);
                    site.blog_posts.push(path);
                }
            }
        }

        let pages = root.join("pages");
        for rel in walk_documents(&pages)? {
            if let Some(route) = route_for(&[], &rel) {
                site.routes.insert(route);
            }
        }

        let statics = root.join("static");
        if statics.is_dir() {
            for entry in ignore::Walk::new(&statics) {
                let entry = entry?;
                if entry.file_type().is_some_and(|t| t.is_file()) {
                    let rel = entry
                        .path()
                        .strip_prefix(&statics)
                        .expect("walked entries live under their walk root");
                    site.assets.insert(unix_path(rel));
                }
            }
        }

        let sidebar_file = config
            .classic()
            .and_then(|c| c.docs.as_ref())
            .and_then(|docs| docs.sidebar_path.as_ref())
            .map(|p| p.as_str())
            .unwrap_or(SIDEBARS_FILE);
        let sidebar_path = root.join(sidebar_file);
        if sidebar_path.is_file() {
            let content = std::fs::read_to_string(&sidebar_path)
                .with_context(|| format!("Failed to read `{}`", sidebar_path.display()))?;
            let sidebars: BTreeMap<String, serde_yaml::Value> = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse `{}`", sidebar_path.display()))?;
            site.sidebars.extend(sidebars.into_keys());
        }

        log::debug!(
            "Scanned `{}`: {} routes, {} sidebars, {} assets",
            root.display(),
            site.routes.len(),
            site.sidebars.len(),
            site.assets.len()
        );
        Ok(site)
    }
}

/// Collect document paths under `dir`, relative to it.
fn walk_documents(dir: &Path) -> Result<Vec<relative_path::RelativePathBuf>> {
    let mut found = Vec::new();
    if !dir.is_dir() {
        return Ok(found);
    }
    for entry in ignore::Walk::new(dir) {
        let entry = entry?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(dir)
            .expect("walked entries live under their walk root");
        let rel = relative_path::RelativePathBuf::from(unix_path(rel));
        match rel.extension() {
            Some("md") | Some("mdx") => found.push(rel),
            _ => {}
        }
    }
    found.sort();
    Ok(found)
}

/// Derive the served route for a document, mirroring how the generator
/// explodes source paths into urls.  `index` and `README` stems collapse
/// into their parent route.
fn route_for(prefix: &[&str], rel: &relative_path::RelativePath) -> Option<String> {
    let stem = rel.file_stem()?;
    let mut parts: Vec<&str> = prefix.to_vec();
    parts.extend(rel.parent().into_iter().flat_map(|p| p.components().map(|c| c.as_str())));
    if stem != "index" && stem != "README" {
        parts.push(stem);
    }
    Some(format!("/{}", parts.join("/")))
}

static DATE_PREFIX: once_cell::sync::Lazy<regex::Regex> =
    once_cell::sync::Lazy::new(|| regex::Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}-(.*)$").unwrap());

/// Blog posts drop any `YYYY-MM-DD-` filename prefix from their route.
fn blog_route_for(rel: &relative_path::RelativePath) -> Option<String> {
    let stem = rel.file_stem()?;
    let slug = DATE_PREFIX
        .captures(stem)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(stem);
    Some(format!("/blog/{slug}"))
}

fn unix_path(rel: &Path) -> String {
    let parts: Vec<_> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    parts.join("/")
}
