//! HTML views for the blog pages.
//!
//! Text fields are HTML-escaped; post bodies are rendered from Markdown with
//! raw HTML passed through as escaped text. Link and image targets are kept
//! only when relative or `http`, `https` or `mailto`; any other target is
//! replaced with `#`.

use std::fmt::Write;

use pulldown_cmark::{CowStr, Event, Parser, Tag, html};
use quill_posts::application::query_handlers::PostView;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Quill</title>
</head>
<body>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

/// Escapes the five HTML-significant characters.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Whether `url` is relative or uses one of the allowed schemes.
///
/// Browsers ignore whitespace and control characters inside a scheme, so
/// those are dropped before the scheme is read.
#[must_use]
pub fn is_safe_url(url: &str) -> bool {
    let compact: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    let Some(colon) = compact.find(':') else {
        return true;
    };
    let scheme = &compact[..colon];
    if scheme.contains(['/', '?', '#']) {
        return true;
    }
    SAFE_SCHEMES
        .iter()
        .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

/// Renders a Markdown post body to HTML.
#[must_use]
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new(source).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut rendered = String::new();
    html::push_html(&mut rendered, parser);
    rendered
}

/// Renders the index page listing `posts` in the order given.
#[must_use]
pub fn render_index(posts: &[PostView]) -> String {
    let mut page = String::from(PAGE_HEAD);
    page.push_str("<h1>Posts</h1>\n<p><a href=\"/posts/add\">Add a post</a></p>\n");
    if posts.is_empty() {
        page.push_str("<p>No posts yet.</p>\n");
    }
    for post in posts {
        // Writing to a String cannot fail.
        let _ = write!(
            page,
            "<article id=\"post-{id}\">\n<h2>{title}</h2>\n<p class=\"author\">by {author}</p>\n{body}</article>\n",
            id = post.post_id,
            title = escape_html(&post.title),
            author = escape_html(&post.author),
            body = render_markdown(&post.content),
        );
    }
    page.push_str(PAGE_TAIL);
    page
}

/// Renders the form used to add a post.
#[must_use]
pub fn render_add_form() -> String {
    let mut page = String::from(PAGE_HEAD);
    page.push_str(
        r#"<h1>Add a post</h1>
<form method="post" action="/posts">
<p><label>Author <input type="text" name="author"></label></p>
<p><label>Title <input type="text" name="title"></label></p>
<p><label>Content <textarea name="content" rows="12" cols="60"></textarea></label></p>
<p><button type="submit">Publish</button></p>
</form>
<p><a href="/posts">Back to posts</a></p>
"#,
    );
    page.push_str(PAGE_TAIL);
    page
}
