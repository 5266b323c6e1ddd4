//! HTML rendering for the hot entry page.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::pipeline::RenderRow;

pub const PLACEHOLDER_IMAGE: &str = "https://placehold.jp/227x127.png?text=noimage";

const HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Hatebu Hotentry</title>
</head>
<body>
    <h1>Hatebu Hotentry</h1>
    <form action="/register" method="post">
        <label for="domain">Block Domain:</label><br>
        <input type="text" id="domain" name="domain" value=""><br>

        <label for="word">Block Word:</label><br>
        <input type="text" id="word" name="word" value=""><br>

        <input type="submit" value="Submit">
    </form>
    <ul>
"#;

const TAIL: &str = r#"    </ul>
</body>
</html>
"#;

pub fn render_index(rows: &[RenderRow]) -> String {
    let mut html = String::with_capacity(HEAD.len() + TAIL.len() + rows.len() * 512);
    html.push_str(HEAD);
    for row in rows {
        push_entry(&mut html, row);
    }
    html.push_str(TAIL);
    html
}

fn push_entry(html: &mut String, row: &RenderRow) {
    let image = row.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE);

    html.push_str(&format!(
        r#"        <li id="entry-{id}">
            <a href="{href}" target="_blank" rel="noopener">{title}</a>
            <small>{count} users · {date} · {url}</small>
            <p>{description}</p>
            <img src="{image}" alt="thumbnail" width="227" height="127">
        </li>
"#,
        id = &row.entry_id[..row.entry_id.len().min(16)],
        href = encode_double_quoted_attribute(&row.link),
        title = encode_text(&row.title),
        count = encode_text(&row.bookmark_count),
        date = encode_text(&row.date),
        url = encode_text(&row.url),
        description = encode_text(&row.description),
        image = encode_double_quoted_attribute(image),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: &str, link: &str, image: Option<&str>) -> RenderRow {
        RenderRow {
            entry_id: crate::domain::Entry::generate_id(link),
            bookmark_count: "42".into(),
            title: title.into(),
            url: link.into(),
            link: link.into(),
            description: "desc".into(),
            date: "2024-03-05 08:09".into(),
            image_url: image.map(String::from),
        }
    }

    #[test]
    fn test_empty_page_is_valid() {
        let html = render_index(&[]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<form action="/register" method="post">"#));
        assert!(html.contains("<ul>"));
        assert!(html.contains("</ul>"));
        assert!(!html.contains("<li"));
    }

    #[test]
    fn test_entry_with_image() {
        let html = render_index(&[row("Rust", "https://example.com/r", Some("https://img.example/r.png"))]);
        assert!(html.contains(r#"<a href="https://example.com/r" target="_blank""#));
        assert!(html.contains(r#"src="https://img.example/r.png""#));
        assert!(!html.contains(PLACEHOLDER_IMAGE));
        assert!(html.contains("42 users"));
    }

    #[test]
    fn test_entry_without_image_uses_placeholder() {
        let html = render_index(&[row("Go", "https://example.com/g", None)]);
        assert!(html.contains(PLACEHOLDER_IMAGE));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render_index(&[row(
            "<script>alert(1)</script>",
            "https://example.com/?a=1&b=\"2\"",
            None,
        )]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a=1&amp;b=&quot;2&quot;"));
    }
}
