//! One-shot skill-bar fill.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use crate::util::dom::StyleTarget;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkillBarReveal {
    fired: bool,
}

impl SkillBarReveal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Returns `true` on the first intersecting report only.
    pub fn trigger(&mut self, is_intersecting: bool) -> bool {
        if !is_intersecting || self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}

/// The width a bar should grow to, if its attribute holds one.
#[must_use]
pub fn target_width(attr: Option<String>) -> Option<String> {
    attr.filter(|width| !width.trim().is_empty())
}

pub fn fill(bar: &impl StyleTarget, width: &str) {
    bar.set_style("width", width);
}
