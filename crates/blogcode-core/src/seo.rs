//! SEO metadata resolution and schema.org structured-data synthesis.
//!
//! All fallback chains here are ordered first-non-empty lookups so the
//! precedence stays auditable in one place.

use serde_json::{Value, json};
use url::Url;

use crate::domain::BlogPost;

/// Site name used for Open Graph metadata and synthesized publisher blocks.
pub const SITE_NAME: &str = "Blogcode";

/// Derived meta descriptions and excerpts are capped at this many characters.
pub const EXCERPT_LEN: usize = 160;

/// First candidate that is non-empty after trimming, if any.
pub fn first_non_empty<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
}

/// Replace HTML tags with single spaces, leaving text content in place.
///
/// A `<` with no closing `>` is not a tag and passes through verbatim.
pub fn strip_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        match rest[start + 1..].find('>') {
            Some(end) if end > 0 => {
                out.push(' ');
                rest = &rest[start + end + 2..];
            }
            Some(end) => {
                // Literal "<>" is not a tag.
                out.push_str("<>");
                rest = &rest[start + end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Plain-text excerpt of an HTML body: tags stripped, trimmed, capped.
pub fn excerpt(content: &str) -> String {
    strip_html(content)
        .trim()
        .chars()
        .take(EXCERPT_LEN)
        .collect()
}

/// Whether an image reference is already fully qualified (`http://`,
/// `https://`, or protocol-relative `//`).
pub fn is_absolute_url(value: &str) -> bool {
    let v = value.trim();
    let lower = v.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || v.starts_with("//")
}

/// Absolute URL for an image reference: fully-qualified values pass through,
/// everything else resolves against the base origin.
pub fn resolve_image_url(image: &str, base_url: &str) -> String {
    let image = image.trim();
    if is_absolute_url(image) {
        return image.to_owned();
    }
    match Url::parse(base_url).and_then(|base| base.join(image)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => image.to_owned(),
    }
}

/// Canonical URL for a post: `{base}/blog/{slug}`.
pub fn canonical_url(base_url: &str, slug: &str) -> String {
    let path = format!("/blog/{slug}");
    match Url::parse(base_url).and_then(|base| base.join(&path)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => format!("{base_url}{path}"),
    }
}

/// Fully resolved page metadata for a blog detail document.
#[derive(Debug, Clone)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub canonical: String,
    /// Absolute Open Graph / Twitter card image, when any image is set.
    pub image: Option<String>,
    pub image_alt: String,
    pub keywords: Vec<String>,
    pub site_name: &'static str,
    pub og_type: &'static str,
    pub twitter_card: &'static str,
}

impl PageMetadata {
    /// Apply the fallback rules to a fetched record.
    pub fn resolve(blog: &BlogPost, base_url: &str) -> Self {
        let image = blog
            .social_image()
            .map(|img| resolve_image_url(img, base_url));

        Self {
            title: blog.resolved_meta_title().to_owned(),
            description: blog.resolved_meta_description(),
            canonical: canonical_url(base_url, &blog.slug),
            image,
            image_alt: format!("Cover image for {}", blog.title),
            keywords: blog.resolved_keywords().to_vec(),
            site_name: SITE_NAME,
            og_type: "article",
            twitter_card: "summary_large_image",
        }
    }
}

/// Collect the structured-data blocks for a post.
///
/// Explicit payloads win: the `schemas` list, then the single `schema`, then
/// the FAQ schema, objects only. When the record carries none, one
/// `BlogPosting` block is synthesized.
pub fn structured_data(blog: &BlogPost, base_url: &str) -> Vec<Value> {
    let mut blocks = Vec::new();

    if let Some(list) = &blog.schemas {
        blocks.extend(list.iter().filter(|v| v.is_object()).cloned());
    }
    if let Some(schema) = &blog.schema {
        if schema.is_object() {
            blocks.push(schema.clone());
        }
    }
    if let Some(faq) = &blog.faq_schema {
        if faq.is_object() {
            blocks.push(faq.clone());
        }
    }

    if blocks.is_empty() {
        blocks.push(fallback_blog_posting(blog, base_url));
    }
    blocks
}

fn fallback_blog_posting(blog: &BlogPost, base_url: &str) -> Value {
    let mut posting = json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": blog.title,
        "url": canonical_url(base_url, &blog.slug),
        "datePublished": blog.created_at.to_rfc3339(),
        "dateModified": blog.last_modified().to_rfc3339(),
        "author": { "@type": "Person", "name": "Editorial Team" },
        "publisher": { "@type": "Organization", "name": SITE_NAME },
        "description": excerpt(&blog.content),
    });

    if let Some(cover) = blog.cover_image() {
        posting["image"] = Value::String(resolve_image_url(cover, base_url));
    }
    posting
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://myapp.com";

    #[test]
    fn first_non_empty_skips_blank_candidates() {
        assert_eq!(
            first_non_empty([None, Some("  "), Some(" x ")]),
            Some("x")
        );
        assert_eq!(first_non_empty([None, Some("")]), None);
    }

    #[test]
    fn strips_tags_to_spaces() {
        assert_eq!(strip_html("<p>Hello world</p>").trim(), "Hello world");
        assert_eq!(
            strip_html("<p>a</p><p>b</p>").split_whitespace().collect::<Vec<_>>(),
            ["a", "b"]
        );
        // Not tags: pass through.
        assert_eq!(strip_html("2 <> 3"), "2 <> 3");
        assert_eq!(strip_html("a < b"), "a < b");
    }

    #[test]
    fn excerpt_is_trimmed_and_capped() {
        assert_eq!(excerpt("<p>Hello world</p>"), "Hello world");
        let long = format!("<p>{}</p>", "x".repeat(500));
        assert_eq!(excerpt(&long).chars().count(), EXCERPT_LEN);
    }

    #[test]
    fn absolute_urls_recognized() {
        assert!(is_absolute_url("https://cdn.example.com/a.png"));
        assert!(is_absolute_url("HTTP://cdn.example.com/a.png"));
        assert!(is_absolute_url("//cdn.example.com/a.png"));
        assert!(!is_absolute_url("/covers/a.png"));
        assert!(!is_absolute_url("covers/a.png"));
    }

    #[test]
    fn relative_images_resolve_against_base() {
        assert_eq!(
            resolve_image_url("/covers/a.png", BASE),
            "https://myapp.com/covers/a.png"
        );
        assert_eq!(
            resolve_image_url("https://cdn.example.com/a.png", BASE),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn canonical_is_base_plus_blog_path() {
        assert_eq!(canonical_url(BASE, "my-post"), "https://myapp.com/blog/my-post");
    }

    #[test]
    fn metadata_resolves_fallbacks() {
        let mut blog = crate::domain::BlogPost::new("hello", "Hello", "<p>Hello world</p>");
        blog.cover_img = Some("/covers/hello.png".to_owned());
        blog.tags = vec!["greetings".to_owned()];

        let meta = PageMetadata::resolve(&blog, BASE);
        assert_eq!(meta.title, "Hello");
        assert_eq!(meta.description, "Hello world");
        assert_eq!(meta.canonical, "https://myapp.com/blog/hello");
        assert_eq!(meta.image.as_deref(), Some("https://myapp.com/covers/hello.png"));
        assert_eq!(meta.image_alt, "Cover image for Hello");
        assert_eq!(meta.keywords, ["greetings".to_owned()]);
        assert_eq!(meta.og_type, "article");
    }

    #[test]
    fn explicit_schemas_win_over_fallback() {
        let mut blog = crate::domain::BlogPost::new("a", "A", "body");
        blog.schemas = Some(vec![json!({"@type": "Article"}), json!("not an object")]);
        blog.faq_schema = Some(json!({"@type": "FAQPage"}));

        let blocks = structured_data(&blog, BASE);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0]["@type"], "Article");
        assert_eq!(blocks[1]["@type"], "FAQPage");
    }

    #[test]
    fn fallback_blog_posting_synthesized() {
        let mut blog = crate::domain::BlogPost::new("a", "A Title", "<p>Body text</p>");
        blog.cover_img = Some("/covers/a.png".to_owned());

        let blocks = structured_data(&blog, BASE);
        assert_eq!(blocks.len(), 1);
        let posting = &blocks[0];
        assert_eq!(posting["@type"], "BlogPosting");
        assert_eq!(posting["headline"], "A Title");
        assert_eq!(posting["url"], "https://myapp.com/blog/a");
        assert_eq!(posting["dateModified"], posting["datePublished"]);
        assert_eq!(posting["image"], "https://myapp.com/covers/a.png");
        assert_eq!(posting["description"], "Body text");
        assert_eq!(posting["publisher"]["name"], SITE_NAME);
    }
}
