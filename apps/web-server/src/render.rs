//! HTML document composition for the server-rendered pages.
//!
//! Layout and styling are out of scope; these renderers produce the
//! document structure: head metadata, structured-data blocks, the cover
//! region (with placeholder fallback), body content, and the related list.

use std::fmt::Write;

use blogcode_core::domain::{BlogPost, RelatedPost};
use blogcode_core::seo::{self, PageMetadata};

/// Served when a post has no cover image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Inline hint shown next to the placeholder.
pub const UPLOAD_HINT: &str =
    "Upload a cover image from the admin panel to replace this default artwork.";

/// Escape text for HTML text nodes and attribute values.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// The public blog detail document.
pub fn blog_detail_document(blog: &BlogPost, related: &[RelatedPost], base_url: &str) -> String {
    let meta = PageMetadata::resolve(blog, base_url);
    let head = render_head(&meta);
    let schemas = render_structured_data(blog, base_url);
    let article = render_article(blog, related);

    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n{head}</head>\n<body>\n\
         <main id=\"main-content\" class=\"blog-detail\" role=\"main\">\n{schemas}{article}</main>\n\
         </body>\n</html>\n"
    )
}

fn render_head(meta: &PageMetadata) -> String {
    let title = escape_html(&meta.title);
    let description = escape_html(&meta.description);
    let canonical = escape_html(&meta.canonical);

    let mut head = String::new();
    let _ = writeln!(head, "<meta charset=\"utf-8\">");
    let _ = writeln!(head, "<title>{title}</title>");
    let _ = writeln!(head, "<meta name=\"description\" content=\"{description}\">");
    if !meta.keywords.is_empty() {
        let _ = writeln!(
            head,
            "<meta name=\"keywords\" content=\"{}\">",
            escape_html(&meta.keywords.join(", "))
        );
    }
    let _ = writeln!(head, "<link rel=\"canonical\" href=\"{canonical}\">");

    // Open Graph card
    let _ = writeln!(head, "<meta property=\"og:type\" content=\"{}\">", meta.og_type);
    let _ = writeln!(head, "<meta property=\"og:site_name\" content=\"{}\">", meta.site_name);
    let _ = writeln!(head, "<meta property=\"og:title\" content=\"{title}\">");
    let _ = writeln!(head, "<meta property=\"og:description\" content=\"{description}\">");
    let _ = writeln!(head, "<meta property=\"og:url\" content=\"{canonical}\">");

    // Twitter card
    let _ = writeln!(head, "<meta name=\"twitter:card\" content=\"{}\">", meta.twitter_card);
    let _ = writeln!(head, "<meta name=\"twitter:title\" content=\"{title}\">");
    let _ = writeln!(head, "<meta name=\"twitter:description\" content=\"{description}\">");

    if let Some(image) = &meta.image {
        let image = escape_html(image);
        let alt = escape_html(&meta.image_alt);
        let _ = writeln!(head, "<meta property=\"og:image\" content=\"{image}\">");
        let _ = writeln!(head, "<meta property=\"og:image:alt\" content=\"{alt}\">");
        let _ = writeln!(head, "<meta name=\"twitter:image\" content=\"{image}\">");
    }
    head
}

fn render_structured_data(blog: &BlogPost, base_url: &str) -> String {
    let mut out = String::new();
    for schema in seo::structured_data(blog, base_url) {
        let json = serde_json::to_string(&schema).unwrap_or_else(|_| "{}".to_owned());
        let _ = writeln!(out, "<script type=\"application/ld+json\">{json}</script>");
    }
    out
}

fn render_article(blog: &BlogPost, related: &[RelatedPost]) -> String {
    let title = escape_html(&blog.title);
    let date = blog.created_at.format("%B %e, %Y");

    let mut article = String::new();
    let _ = writeln!(article, "<article aria-labelledby=\"blog-title\">");
    let _ = writeln!(article, "<header>");
    let _ = writeln!(article, "<p class=\"eyebrow\">{date}</p>");
    let _ = writeln!(article, "<h1 id=\"blog-title\">{title}</h1>");
    if !blog.tags.is_empty() {
        let _ = writeln!(
            article,
            "<p class=\"tags\">{}</p>",
            escape_html(&blog.tags.join(" / "))
        );
    }
    let _ = writeln!(article, "</header>");

    article.push_str(&render_cover(blog));

    // Body content is trusted HTML authored through the admin flow.
    let _ = writeln!(article, "<div class=\"content\">{}</div>", blog.content);

    if !related.is_empty() {
        let _ = writeln!(article, "<aside class=\"related\">");
        let _ = writeln!(article, "<h3>Related Posts</h3>");
        let _ = writeln!(article, "<ul>");
        for item in related {
            let _ = writeln!(
                article,
                "<li><a href=\"/blog/{}\">{}</a></li>",
                escape_html(&item.slug),
                escape_html(&item.title)
            );
        }
        let _ = writeln!(article, "</ul>");
        let _ = writeln!(article, "</aside>");
    }

    let _ = writeln!(article, "</article>");
    article
}

fn render_cover(blog: &BlogPost) -> String {
    let cover = blog.cover_image();
    let is_external = cover.map(seo::is_absolute_url).unwrap_or(false);
    let src = cover.unwrap_or(PLACEHOLDER_IMAGE);
    let is_placeholder = cover.is_none();

    let class = if is_placeholder {
        "cover cover--placeholder"
    } else {
        "cover"
    };
    // External covers bypass the image optimizer.
    let unoptimized = if is_external {
        " data-unoptimized=\"true\""
    } else {
        ""
    };

    let mut out = String::new();
    let _ = writeln!(out, "<div class=\"{class}\">");
    let _ = writeln!(
        out,
        "<img src=\"{}\" alt=\"{}\" loading=\"eager\"{unoptimized}>",
        escape_html(src),
        escape_html(&blog.title)
    );
    if is_placeholder {
        let _ = writeln!(out, "<span class=\"cover__hint\">{UPLOAD_HINT}</span>");
    }
    let _ = writeln!(out, "</div>");
    out
}

/// The admin edit document: the record is handed to the external blog form
/// collaborator in edit mode as embedded JSON.
pub fn admin_edit_document(blog: &BlogPost) -> String {
    let initial_data = serde_json::to_string(blog).unwrap_or_else(|_| "{}".to_owned());

    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n<title>Edit Blog Post</title>\n\
         </head>\n<body>\n\
         <section class=\"admin-panel\">\n\
         <div id=\"blog-form\" data-mode=\"edit\"></div>\n\
         <script type=\"application/json\" id=\"blog-form-initial-data\">{initial_data}</script>\n\
         </section>\n\
         </body>\n</html>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn blog() -> BlogPost {
        BlogPost::new("first-post", "First Post", "<p>Hello world</p>")
    }

    const BASE: &str = "https://myapp.com";

    #[test]
    fn missing_cover_renders_placeholder_and_hint() {
        let html = blog_detail_document(&blog(), &[], BASE);
        assert!(html.contains(PLACEHOLDER_IMAGE));
        assert!(html.contains(UPLOAD_HINT));
        assert!(html.contains("cover--placeholder"));
        assert!(!html.contains("data-unoptimized"));
    }

    #[test]
    fn external_cover_is_marked_unoptimized() {
        let mut blog = blog();
        blog.cover_img = Some("https://cdn.example.com/a.png".to_owned());

        let html = blog_detail_document(&blog, &[], BASE);
        assert!(html.contains("src=\"https://cdn.example.com/a.png\""));
        assert!(html.contains("data-unoptimized=\"true\""));
        assert!(!html.contains(UPLOAD_HINT));
    }

    #[test]
    fn local_cover_is_not_marked_unoptimized() {
        let mut blog = blog();
        blog.cover_img = Some("/covers/a.png".to_owned());

        let html = blog_detail_document(&blog, &[], BASE);
        assert!(html.contains("src=\"/covers/a.png\""));
        assert!(!html.contains("data-unoptimized"));
    }

    #[test]
    fn related_section_only_when_non_empty() {
        let html = blog_detail_document(&blog(), &[], BASE);
        assert!(!html.contains("Related Posts"));

        let related = vec![RelatedPost {
            id: Uuid::new_v4(),
            slug: "second-post".to_owned(),
            title: "Second Post".to_owned(),
        }];
        let html = blog_detail_document(&blog(), &related, BASE);
        assert!(html.contains("Related Posts"));
        assert!(html.contains("href=\"/blog/second-post\""));
    }

    #[test]
    fn head_carries_metadata_and_canonical() {
        let html = blog_detail_document(&blog(), &[], BASE);
        assert!(html.contains("<title>First Post</title>"));
        assert!(html.contains("content=\"Hello world\""));
        assert!(html.contains("href=\"https://myapp.com/blog/first-post\""));
        assert!(html.contains("og:site_name\" content=\"Blogcode\""));
        assert!(html.contains("twitter:card\" content=\"summary_large_image\""));
    }

    #[test]
    fn structured_data_block_is_embedded() {
        let html = blog_detail_document(&blog(), &[], BASE);
        assert!(html.contains("application/ld+json"));
        assert!(html.contains("\"@type\":\"BlogPosting\""));
    }

    #[test]
    fn body_content_is_rendered_raw() {
        let html = blog_detail_document(&blog(), &[], BASE);
        assert!(html.contains("<div class=\"content\"><p>Hello world</p></div>"));
    }

    #[test]
    fn title_text_is_escaped() {
        let mut blog = blog();
        blog.title = "Tips & <Tricks>".to_owned();
        let html = blog_detail_document(&blog, &[], BASE);
        assert!(html.contains("<h1 id=\"blog-title\">Tips &amp; &lt;Tricks&gt;</h1>"));
    }

    #[test]
    fn admin_document_embeds_record_in_edit_mode() {
        let blog = blog();
        let html = admin_edit_document(&blog);
        assert!(html.contains("data-mode=\"edit\""));
        assert!(html.contains("blog-form-initial-data"));
        assert!(html.contains("\"slug\":\"first-post\""));
    }
}
