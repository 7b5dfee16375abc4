use super::*;
use crate::test_support::FakeElement;

// =============================================================
// Helpers
// =============================================================

fn nav(hrefs: &[&str]) -> Vec<(FakeElement, Option<String>)> {
    hrefs.iter().map(|href| (FakeElement::new(), Some((*href).to_owned()))).collect()
}

fn active_hrefs(links: &[(FakeElement, Option<String>)]) -> Vec<String> {
    links
        .iter()
        .filter(|(link, _)| link.has_class("active"))
        .filter_map(|(_, href)| href.clone())
        .collect()
}

// =============================================================
// Tracker
// =============================================================

#[test]
fn starts_on_initial_section() {
    assert_eq!(SectionTracker::new("home").active(), "home");
}

#[test]
fn entering_section_becomes_active() {
    let mut tracker = SectionTracker::new("home");
    assert_eq!(tracker.observe([("projects", true)]), Some("projects"));
    assert_eq!(tracker.active(), "projects");
}

#[test]
fn leaving_reports_do_not_transition() {
    let mut tracker = SectionTracker::new("home");
    tracker.observe([("about", true)]);
    assert_eq!(tracker.observe([("about", false), ("skills", false)]), None);
    assert_eq!(tracker.active(), "about");
}

#[test]
fn last_entering_entry_in_batch_wins() {
    let mut tracker = SectionTracker::new("home");
    let next = tracker.observe([("about", true), ("skills", true), ("contact", false)]);
    assert_eq!(next, Some("skills"));
}

#[test]
fn reentering_active_section_still_reports() {
    let mut tracker = SectionTracker::new("home");
    assert_eq!(tracker.observe([("home", true)]), Some("home"));
}

#[test]
fn entries_without_id_are_skipped() {
    let mut tracker = SectionTracker::new("home");
    assert_eq!(tracker.observe([("about", true), ("", true)]), Some("about"));
}

#[test]
fn empty_batch_is_noop() {
    let mut tracker = SectionTracker::new("home");
    assert_eq!(tracker.observe(std::iter::empty()), None);
    assert_eq!(tracker.active(), "home");
}

// =============================================================
// Link highlighting
// =============================================================

#[test]
fn targets_section_requires_exact_anchor() {
    assert!(targets_section(Some("#projects"), "projects"));
    assert!(!targets_section(Some("projects"), "projects"));
    assert!(!targets_section(Some("#projects-archive"), "projects"));
    assert!(!targets_section(Some("/index.html#projects"), "projects"));
    assert!(!targets_section(None, "projects"));
}

#[test]
fn only_links_to_active_section_are_marked() {
    let links = nav(&["#home", "#projects", "#contact", "#projects"]);
    links[0].0.add_class("active");

    let mut tracker = SectionTracker::new("home");
    let active = tracker.observe([("projects", true)]).unwrap().to_owned();
    highlight_links(&links, &active);

    assert_eq!(active_hrefs(&links), vec!["#projects".to_owned(), "#projects".to_owned()]);
}

#[test]
fn unknown_section_clears_all_links() {
    let links = nav(&["#home", "#about"]);
    highlight_links(&links, "home");
    highlight_links(&links, "footer");
    assert!(active_hrefs(&links).is_empty());
}
