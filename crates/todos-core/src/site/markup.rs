//! Small helpers that emit the recurring markup of the site pages.

use super::LinkMode;
use crate::output::escape_markup;

/// Address of a site page: its file stem plus the extension of the link mode.
pub fn page_url(mode: LinkMode, page: &str) -> String {
    format!("{}{}", page, mode.extension())
}

/// Anchor to another page of the site.
pub fn link(mode: LinkMode, page: &str, text: &str) -> String {
    format!(
        r#"<a href="{}">{}</a>"#,
        escape_markup(&page_url(mode, page)),
        escape_markup(text)
    )
}

/// Sidebar entry; the page being rendered is marked active.
pub fn menu_item(mode: LinkMode, current: &str, page: &str, text: &str) -> String {
    let class = if page == current { r#" class="active""# } else { "" };
    format!(
        r#"<a href="{}"{}>{}</a>"#,
        escape_markup(&page_url(mode, page)),
        class,
        escape_markup(text)
    )
}

/// Anchor to an external address, opened in a new window.
pub fn blank(url: &str, text: &str) -> String {
    format!(
        r#"<a href="{}" onclick="window.open(this.href); return false;">{}</a>"#,
        escape_markup(url),
        escape_markup(text)
    )
}

/// Display form of an e-mail address that is not trivially harvestable.
pub fn email(address: &str) -> String {
    let obfuscated = address.replace('@', " [at] ").replace('.', " [dot] ");
    format!(r#"<span class="email">{}</span>"#, escape_markup(&obfuscated))
}

pub fn img(src: &str, alt: &str) -> String {
    format!(
        r#"<img src="{}" alt="{}" />"#,
        escape_markup(src),
        escape_markup(alt)
    )
}

/// Thumbnail (`name_sm.ext`) linked to the full-size image (`name.ext`).
pub fn screenshot(src: &str, alt: &str) -> String {
    let full = match src.rfind("_sm.") {
        Some(pos) => format!("{}{}", &src[..pos], &src[pos + 3..]),
        None => src.to_string(),
    };
    format!(
        r#"<a href="{}" title="{}">{}</a>"#,
        escape_markup(&full),
        escape_markup(alt),
        img(src, alt)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_follow_the_mode() {
        assert_eq!(page_url(LinkMode::Server, "index"), "index.php");
        assert_eq!(page_url(LinkMode::Offline, "index"), "index.html");
        assert_eq!(
            link(LinkMode::Offline, "manual", "Manual"),
            r#"<a href="manual.html">Manual</a>"#
        );
    }

    #[test]
    fn menu_item_marks_current_page() {
        assert_eq!(
            menu_item(LinkMode::Server, "license", "license", "License"),
            r#"<a href="license.php" class="active">License</a>"#
        );
        assert_eq!(
            menu_item(LinkMode::Server, "index", "license", "License"),
            r#"<a href="license.php">License</a>"#
        );
    }

    #[test]
    fn email_is_obfuscated() {
        assert_eq!(
            email("someone@users.example.net"),
            r#"<span class="email">someone [at] users [dot] example [dot] net</span>"#
        );
    }

    #[test]
    fn blank_escapes_url() {
        assert_eq!(
            blank("http://example.com/?a=1&b=2", "Example"),
            r#"<a href="http://example.com/?a=1&amp;b=2" onclick="window.open(this.href); return false;">Example</a>"#
        );
    }

    #[test]
    fn screenshot_links_full_image() {
        assert_eq!(
            screenshot("images/screenshots/txt_sm.jpg", "TXT output"),
            r#"<a href="images/screenshots/txt.jpg" title="TXT output"><img src="images/screenshots/txt_sm.jpg" alt="TXT output" /></a>"#
        );
        assert!(screenshot("logo.png", "").starts_with(r#"<a href="logo.png""#));
    }
}
