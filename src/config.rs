//! Tunable page behavior.
//!
//! DESIGN
//! ======
//! Every field defaults to the value in [`crate::consts`], so an absent or
//! partial override document still yields a complete config. The page may
//! embed `<script type="application/json" id="portfolio-config">` to adjust
//! timings and thresholds without rebuilding the module.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::state::theme::Theme;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Page-wide settings shared by every component.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub storage_key: String,
    pub default_theme: Theme,
    pub initial_section: String,
    pub header_offset_px: f64,
    pub section_threshold: f64,
    pub section_margin_px: f64,
    pub entrance_threshold: f64,
    pub entrance_offset_px: f64,
    pub entrance_duration_ms: u32,
    pub skills_threshold: f64,
    pub skills_bottom_margin_px: f64,
    pub skill_fill_delay_ms: u32,
    pub toast_duration_ms: u32,
    pub mobile_breakpoint_px: f64,
    pub parallax_speed: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            default_theme: Theme::Dark,
            initial_section: consts::INITIAL_SECTION.to_owned(),
            header_offset_px: consts::HEADER_OFFSET_PX,
            section_threshold: consts::SECTION_THRESHOLD,
            section_margin_px: consts::SECTION_MARGIN_PX,
            entrance_threshold: consts::ENTRANCE_THRESHOLD,
            entrance_offset_px: consts::ENTRANCE_OFFSET_PX,
            entrance_duration_ms: consts::ENTRANCE_DURATION_MS,
            skills_threshold: consts::SKILLS_THRESHOLD,
            skills_bottom_margin_px: consts::SKILLS_BOTTOM_MARGIN_PX,
            skill_fill_delay_ms: consts::SKILL_FILL_DELAY_MS,
            toast_duration_ms: consts::TOAST_DURATION_MS,
            mobile_breakpoint_px: consts::MOBILE_BREAKPOINT_PX,
            parallax_speed: consts::PARALLAX_SPEED,
        }
    }
}

impl SiteConfig {
    /// Parse an override document and check it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown theme
    /// names, and [`ConfigError::OutOfRange`] when a value fails [`Self::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject thresholds outside `[0, 1]` and negative or non-finite lengths.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ratios = [
            ("section_threshold", self.section_threshold),
            ("entrance_threshold", self.entrance_threshold),
            ("skills_threshold", self.skills_threshold),
        ];
        for (field, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }

        let lengths = [
            ("header_offset_px", self.header_offset_px),
            ("section_margin_px", self.section_margin_px),
            ("entrance_offset_px", self.entrance_offset_px),
            ("skills_bottom_margin_px", self.skills_bottom_margin_px),
            ("mobile_breakpoint_px", self.mobile_breakpoint_px),
        ];
        for (field, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }

        if !self.parallax_speed.is_finite() {
            return Err(ConfigError::OutOfRange { field: "parallax_speed", value: self.parallax_speed });
        }
        Ok(())
    }
}
