use super::*;

/// A source document: optional YAML frontmatter plus the body.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Document {
    front: Frontmatter,
    content: String,
}

impl Document {
    pub fn parse(content: &str) -> Result<Self> {
        let (front, content) = split_document(content);
        let front = front
            .map(parse_frontmatter)
            .map_or(Ok(None), |r| r.map(Some))?
            .unwrap_or_default();
        let content = content.to_owned();
        Ok(Self { front, content })
    }

    pub fn front(&self) -> &Frontmatter {
        &self.front
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_parts(self) -> (Frontmatter, String) {
        let Self { front, content } = self;
        (front, content)
    }
}

/// The frontmatter fields the configuration contract cares about.
///
/// Posts may carry more; unknown fields pass through untouched to the
/// rendering side.
#[derive(Debug, Eq, PartialEq, Default, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
pub struct Frontmatter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub tags: Vec<String>,
    pub authors: Vec<String>,
}

fn parse_frontmatter(front: &str) -> Result<Frontmatter> {
    let front: Frontmatter = serde_yaml::from_str(front)
        .map_err(|e| Status::new("Failed to parse frontmatter").with_source(e))?;
    Ok(front)
}

static FRONT_MATTER: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
    regex::RegexBuilder::new(r"\A---\s*\r?\n([\s\S]*\n)?---\s*\r?\n(.*)")
        .dot_matches_new_line(true)
        .build()
        .unwrap()
});

fn split_document(content: &str) -> (Option<&str>, &str) {
    if let Some(captures) = FRONT_MATTER.captures(content) {
        let front_split = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
        let content_split = captures.get(2).expect("unconditional capture").as_str();

        if front_split.is_empty() {
            (None, content_split)
        } else {
            (Some(front_split), content_split)
        }
    } else {
        (None, content)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn split_document_empty() {
        let input = "";
        let (front, content) = split_document(input);
        assert!(front.is_none());
        assert_eq!(content, "");
    }

    #[test]
    fn split_document_no_front_matter() {
        let input = "Body";
        let (front, content) = split_document(input);
        assert!(front.is_none());
        assert_eq!(content, "Body");
    }

    #[test]
    fn split_document_empty_front_matter() {
        let input = "---\n---\nBody";
        let (front, content) = split_document(input);
        assert!(front.is_none());
        assert_eq!(content, "Body");
    }

    #[test]
    fn split_document_front_matter_and_body() {
        let input = "---\ntitle: Hello\n---\nbody";
        let (front, content) = split_document(input);
        assert_eq!(front.unwrap(), "title: Hello\n");
        assert_eq!(content, "body");
    }

    #[test]
    fn split_document_no_new_line_after_front_matter() {
        let input = "invalid_front_matter---\nbody";
        let (front, content) = split_document(input);
        assert!(front.is_none());
        assert_eq!(content, input);
    }

    #[test]
    fn parse_tags_and_authors() {
        let doc = Document::parse(
            "---\ntitle: Release notes\ntags: [release, announcement]\nauthors: [garrison]\n---\nBody\n",
        )
        .unwrap();
        assert_eq!(doc.front().title.as_deref(), Some("Release notes"));
        assert_eq!(doc.front().tags, vec!["release", "announcement"]);
        assert_eq!(doc.front().authors, vec!["garrison"]);
        assert_eq!(doc.content(), "Body\n");
    }

    #[test]
    fn parse_invalid_frontmatter() {
        let result = Document::parse("---\ntags: {\n---\nBody\n");
        assert!(result.is_err());
    }

    #[test]
    fn parse_no_front() {
        let doc = Document::parse("Body").unwrap();
        assert_eq!(doc.front(), &Frontmatter::default());
        let (_, content) = doc.into_parts();
        assert_eq!(content, "Body");
    }
}
