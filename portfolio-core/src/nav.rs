//! Navigation rules that do not need the DOM.

/// Space reserved for the fixed header when scrolling to an in-page anchor.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// A nav link is active when its path equals the current path.
#[must_use]
pub fn is_active_link(link_path: &str, current_path: &str) -> bool {
    normalize(link_path) == normalize(current_path)
}

fn normalize(path: &str) -> &str {
    if path.is_empty() { "/" } else { path }
}

/// The mobile menu closes once the viewport grows past the breakpoint.
#[must_use]
pub fn should_close_menu(viewport_width: f64, breakpoint_px: u32) -> bool {
    viewport_width > f64::from(breakpoint_px)
}

/// Absolute scroll target for an anchor whose top edge is `element_top`
/// relative to the viewport while the page is scrolled to `page_y`.
#[must_use]
pub fn scroll_target_offset(element_top: f64, page_y: f64) -> f64 {
    element_top + page_y - HEADER_OFFSET_PX
}

/// In-page anchors worth smooth-scrolling to; a bare `#` is ignored.
#[must_use]
pub fn is_scrollable_anchor(href: &str) -> bool {
    href.len() > 1 && href.starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_link_matches_exact_paths() {
        assert!(is_active_link("/projects.html", "/projects.html"));
        assert!(is_active_link("/", "/"));
        assert!(is_active_link("", "/"));
        assert!(!is_active_link("/about.html", "/projects.html"));
        assert!(!is_active_link("/", "/about.html"));
    }

    #[test]
    fn menu_closes_only_above_breakpoint() {
        assert!(should_close_menu(1024.0, 768));
        assert!(!should_close_menu(768.0, 768));
        assert!(!should_close_menu(375.0, 768));
    }

    #[test]
    fn scroll_target_subtracts_header() {
        assert!((scroll_target_offset(300.0, 1000.0) - 1220.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bare_hash_is_not_scrollable() {
        assert!(!is_scrollable_anchor("#"));
        assert!(!is_scrollable_anchor(""));
        assert!(is_scrollable_anchor("#contact"));
    }
}
