#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_matches_page_contract() {
    let config = SiteConfig::default();
    assert_eq!(config.storage_key, "portfolio-theme");
    assert_eq!(config.default_theme, Theme::Dark);
    assert_eq!(config.initial_section, "home");
    assert_eq!(config.header_offset_px, 80.0);
    assert_eq!(config.section_threshold, 0.3);
    assert_eq!(config.entrance_threshold, 0.1);
    assert_eq!(config.skills_threshold, 0.5);
    assert_eq!(config.skill_fill_delay_ms, 200);
    assert_eq!(config.toast_duration_ms, 5000);
}

#[test]
fn default_passes_validation() {
    assert!(SiteConfig::default().validate().is_ok());
}

// =============================================================
// from_json
// =============================================================

#[test]
fn empty_object_yields_defaults() {
    let config = SiteConfig::from_json("{}").unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = SiteConfig::from_json(r#"{"toast_duration_ms": 3000, "default_theme": "neon"}"#).unwrap();
    assert_eq!(config.toast_duration_ms, 3000);
    assert_eq!(config.default_theme, Theme::Neon);
    assert_eq!(config.header_offset_px, 80.0);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = SiteConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unknown_theme_is_parse_error() {
    let err = SiteConfig::from_json(r#"{"default_theme": "sepia"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn threshold_above_one_is_rejected() {
    let err = SiteConfig::from_json(r#"{"section_threshold": 1.5}"#).unwrap_err();
    match err {
        ConfigError::OutOfRange { field, value } => {
            assert_eq!(field, "section_threshold");
            assert_eq!(value, 1.5);
        }
        ConfigError::Parse(e) => panic!("expected range error, got {e}"),
    }
}

#[test]
fn negative_header_offset_is_rejected() {
    let err = SiteConfig::from_json(r#"{"header_offset_px": -1}"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { field: "header_offset_px", .. }));
}
