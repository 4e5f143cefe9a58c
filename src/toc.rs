//! GitHub-flavored markdown anchors for the package index.

/// Link to a heading in the same document.
pub fn render_toc_link(text: &str) -> String {
    format!("[{}](#{})", text, github_slug(text))
}

/// Index list item, indented one level per `depth`.
pub fn render_toc_item(text: &str, depth: usize) -> String {
    format!("{}* {}", "  ".repeat(depth), render_toc_link(text))
}

/// GitHub heading anchor slug.
///
/// - lowercase
/// - drop everything but alphanumerics, spaces, and hyphens
/// - replace spaces with hyphens
pub fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}
