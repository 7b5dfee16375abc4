//! Scroll geometry and mobile menu rules.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Document offset to scroll to so a target sits just below the header.
///
/// `top` is the target's top edge relative to the viewport and `scroll_y`
/// the current page scroll.
#[must_use]
pub fn scroll_target(top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    top + scroll_y - header_offset
}

/// Transform applied to the hero overlay at a given scroll position.
#[must_use]
pub fn parallax_transform(scroll_y: f64, speed: f64) -> String {
    format!("translateY({}px)", scroll_y * speed)
}

/// Whether a resize to `viewport_width` should close the mobile menu.
#[must_use]
pub fn closes_menu_on_resize(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width >= breakpoint
}

/// Selector for a nav link's current `href` attribute, if it is in-page.
#[must_use]
pub fn link_selector(href: Option<&str>) -> Option<&str> {
    href.and_then(anchor_selector)
}

/// Selector for an in-page link target. Only `#fragment` hrefs qualify.
#[must_use]
pub fn anchor_selector(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    (!fragment.is_empty()).then_some(href)
}
