use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::seo;

/// Blog post entity - the single persisted record of the system.
///
/// Serializes in camelCase to match the read API wire format
/// (`metaTitle`, `coverImg`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Unique id - the admin lookup key.
    pub id: Uuid,
    /// Unique URL-safe identifier - the public lookup key.
    pub slug: String,
    pub title: String,
    /// HTML body content.
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Explicit schema.org payloads, preferred over any synthesized block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schemas: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faq_schema: Option<Value>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BlogPost {
    /// Create a new post with only the required fields set.
    pub fn new(slug: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            slug: slug.into(),
            title: title.into(),
            content: content.into(),
            cover_img: None,
            meta_title: None,
            meta_description: None,
            og_image: None,
            keywords: Vec::new(),
            tags: Vec::new(),
            schemas: None,
            schema: None,
            faq_schema: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Meta title: the explicit override when non-empty, else the title.
    pub fn resolved_meta_title(&self) -> &str {
        seo::first_non_empty([self.meta_title.as_deref()]).unwrap_or(&self.title)
    }

    /// Meta description: the explicit override when non-empty, else the
    /// first 160 characters of the body with markup stripped.
    pub fn resolved_meta_description(&self) -> String {
        match seo::first_non_empty([self.meta_description.as_deref()]) {
            Some(explicit) => explicit.to_owned(),
            None => seo::excerpt(&self.content),
        }
    }

    /// Social (Open Graph / Twitter) image: override first, then cover.
    pub fn social_image(&self) -> Option<&str> {
        seo::first_non_empty([self.og_image.as_deref(), self.cover_img.as_deref()])
    }

    /// Trimmed cover image reference, when one is set.
    pub fn cover_image(&self) -> Option<&str> {
        seo::first_non_empty([self.cover_img.as_deref()])
    }

    /// Keywords for metadata: the keyword list when non-empty, else tags.
    pub fn resolved_keywords(&self) -> &[String] {
        if self.keywords.is_empty() {
            &self.tags
        } else {
            &self.keywords
        }
    }

    /// Last-modified time, defaulting to the creation time.
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }
}

/// Compact summary used by the related-posts list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedPost {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_title_falls_back_to_title() {
        let mut blog = BlogPost::new("intro", "Intro Post", "<p>body</p>");
        assert_eq!(blog.resolved_meta_title(), "Intro Post");

        blog.meta_title = Some("  ".to_owned());
        assert_eq!(blog.resolved_meta_title(), "Intro Post");

        blog.meta_title = Some(" SEO title ".to_owned());
        assert_eq!(blog.resolved_meta_title(), "SEO title");
    }

    #[test]
    fn meta_description_derived_from_content() {
        let blog = BlogPost::new("hello", "Hello", "<p>Hello world</p>");
        assert_eq!(blog.resolved_meta_description(), "Hello world");
    }

    #[test]
    fn meta_description_prefers_override() {
        let mut blog = BlogPost::new("hello", "Hello", "<p>Hello world</p>");
        blog.meta_description = Some("Custom description".to_owned());
        assert_eq!(blog.resolved_meta_description(), "Custom description");
    }

    #[test]
    fn social_image_prefers_og_override() {
        let mut blog = BlogPost::new("a", "A", "");
        assert_eq!(blog.social_image(), None);

        blog.cover_img = Some("/covers/a.png".to_owned());
        assert_eq!(blog.social_image(), Some("/covers/a.png"));

        blog.og_image = Some("https://cdn.example.com/og.png".to_owned());
        assert_eq!(blog.social_image(), Some("https://cdn.example.com/og.png"));
    }

    #[test]
    fn keywords_fall_back_to_tags() {
        let mut blog = BlogPost::new("a", "A", "");
        blog.tags = vec!["rust".to_owned()];
        assert_eq!(blog.resolved_keywords(), ["rust".to_owned()]);

        blog.keywords = vec!["seo".to_owned()];
        assert_eq!(blog.resolved_keywords(), ["seo".to_owned()]);
    }

    #[test]
    fn last_modified_defaults_to_created() {
        let mut blog = BlogPost::new("a", "A", "");
        assert_eq!(blog.last_modified(), blog.created_at);

        let later = blog.created_at + chrono::Duration::hours(2);
        blog.updated_at = Some(later);
        assert_eq!(blog.last_modified(), later);
    }

    #[test]
    fn serializes_in_camel_case() {
        let mut blog = BlogPost::new("a", "A", "body");
        blog.cover_img = Some("/c.png".to_owned());
        let json = serde_json::to_value(&blog).unwrap();
        assert!(json.get("coverImg").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("cover_img").is_none());
    }
}
