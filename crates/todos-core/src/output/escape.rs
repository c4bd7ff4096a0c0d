//! Entity escaping and link markup shared by the XML and HTML reports.

/// Replace the characters special in XML and HTML by entities.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Anchor built from a target address and a label, both escaped.
pub fn html_link(target: &str, text: &str) -> String {
    format!(
        r#"<a href="{}">{}</a>"#,
        escape_markup(target),
        escape_markup(text)
    )
}
