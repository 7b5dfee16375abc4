//! Active-section tracking for navigation highlighting.
//!
//! DESIGN
//! ======
//! The tracker is a reducer over visibility batches. Only entering reports
//! move the active section; leaving reports are ignored, so the last section
//! to enter stays active until another one enters.
//!
//! Within one batch the last intersecting entry wins. Batches arrive in the
//! platform's delivery order and carry no priority beyond it.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use crate::consts::ACTIVE_CLASS;
use crate::util::dom::ClassTarget;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionTracker {
    active: String,
}

impl SectionTracker {
    #[must_use]
    pub fn new(initial: &str) -> Self {
        Self { active: initial.to_owned() }
    }

    #[must_use]
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Fold one batch of `(section id, is intersecting)` reports.
    ///
    /// Returns the newly active section when any entry was entering, even if
    /// it is the section that was already active. Entries without an id are
    /// skipped.
    pub fn observe<'a>(&mut self, batch: impl IntoIterator<Item = (&'a str, bool)>) -> Option<&str> {
        let entered = batch
            .into_iter()
            .filter(|(id, intersecting)| *intersecting && !id.is_empty())
            .map(|(id, _)| id)
            .last()?;
        entered.clone_into(&mut self.active);
        Some(&self.active)
    }
}

/// Whether a nav link `href` points at `section_id`.
#[must_use]
pub fn targets_section(href: Option<&str>, section_id: &str) -> bool {
    href.and_then(|href| href.strip_prefix('#')) == Some(section_id)
}

/// Rescan every nav link, marking only those targeting `section_id`.
///
/// Each link is paired with its `href` attribute.
pub fn highlight_links<L: ClassTarget>(links: &[(L, Option<String>)], section_id: &str) {
    for (link, href) in links {
        link.set_class(ACTIVE_CLASS, targets_section(href.as_deref(), section_id));
    }
}
