//! Fade-in-on-first-sight for content blocks.
//!
//! Blocks start transparent and shifted down; the browser animates them to
//! their resting state through the transition declared at conceal time.

#[cfg(test)]
#[path = "entrance_test.rs"]
mod entrance_test;

use crate::config::SiteConfig;
use crate::util::dom::StyleTarget;

pub const VISIBLE_OPACITY: &str = "1";
pub const HIDDEN_OPACITY: &str = "0";
pub const RESTING_TRANSFORM: &str = "translateY(0)";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceStyle {
    /// Initial downward shift, in CSS pixels.
    pub offset_px: f64,
    pub duration_ms: u32,
}

impl EntranceStyle {
    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self { offset_px: config.entrance_offset_px, duration_ms: config.entrance_duration_ms }
    }

    #[must_use]
    pub fn hidden_transform(&self) -> String {
        format!("translateY({}px)", self.offset_px)
    }

    /// e.g. `opacity 0.8s ease-out, transform 0.8s ease-out`
    #[must_use]
    pub fn transition(&self) -> String {
        let secs = f64::from(self.duration_ms) / 1000.0;
        format!("opacity {secs}s ease-out, transform {secs}s ease-out")
    }

    /// Put `block` in its pre-entrance state.
    pub fn conceal(&self, block: &impl StyleTarget) {
        block.set_style("opacity", HIDDEN_OPACITY);
        block.set_style("transform", &self.hidden_transform());
        block.set_style("transition", &self.transition());
    }
}

/// Start watching `blocks`, then hide them.
///
/// Blocks are only concealed once `watch` succeeds. Without a watcher
/// nothing would ever reveal them, so on failure they stay as authored.
///
/// # Errors
///
/// Returns the error from `watch` untouched.
pub fn arm<T, W, E>(style: &EntranceStyle, blocks: &[T], watch: impl FnOnce(&[T]) -> Result<W, E>) -> Result<W, E>
where
    T: StyleTarget,
{
    let watcher = watch(blocks)?;
    for block in blocks {
        style.conceal(block);
    }
    Ok(watcher)
}

/// Handle one visibility report. Returns whether the block is now revealed.
///
/// Repeated intersecting reports write the same resting state again.
pub fn on_sighting(block: &impl StyleTarget, is_intersecting: bool) -> bool {
    if is_intersecting {
        block.set_style("opacity", VISIBLE_OPACITY);
        block.set_style("transform", RESTING_TRANSFORM);
    }
    is_intersecting
}
