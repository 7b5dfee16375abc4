#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn target_subtracts_header() {
    assert_eq!(scroll_target(500.0, 1200.0, 80.0), 1620.0);
}

#[test]
fn target_above_viewport_scrolls_back() {
    assert_eq!(scroll_target(-300.0, 1000.0, 80.0), 620.0);
}

#[test]
fn target_near_top_can_go_negative() {
    assert_eq!(scroll_target(10.0, 0.0, 80.0), -70.0);
}

#[test]
fn parallax_moves_at_half_speed() {
    assert_eq!(parallax_transform(0.0, 0.5), "translateY(0px)");
    assert_eq!(parallax_transform(240.0, 0.5), "translateY(120px)");
    assert_eq!(parallax_transform(75.0, 0.5), "translateY(37.5px)");
}

#[test]
fn resize_closes_menu_from_breakpoint_up() {
    assert!(!closes_menu_on_resize(767.0, 768.0));
    assert!(closes_menu_on_resize(768.0, 768.0));
    assert!(closes_menu_on_resize(1440.0, 768.0));
}

#[test]
fn anchor_selector_accepts_fragments_only() {
    assert_eq!(anchor_selector("#about"), Some("#about"));
    assert_eq!(anchor_selector("#"), None);
    assert_eq!(anchor_selector("about.html"), None);
    assert_eq!(anchor_selector(""), None);
}

#[test]
fn link_selector_follows_current_href() {
    assert_eq!(link_selector(Some("#about")), Some("#about"));
    assert_eq!(link_selector(Some("#contact")), Some("#contact"));
    assert_eq!(link_selector(Some("https://example.com")), None);
    assert_eq!(link_selector(None), None);
}
