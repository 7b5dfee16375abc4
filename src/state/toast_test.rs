use super::*;

#[test]
fn severity_icons() {
    assert_eq!(Severity::Error.icon_class(), "fas fa-exclamation-circle");
    assert_eq!(Severity::Error.icon_color(), "#ef4444");
    assert_eq!(Severity::Success.icon_class(), "fas fa-check-circle");
    assert_eq!(Severity::Success.icon_color(), "#10b981");
}

#[test]
fn error_toast_has_error_title() {
    let toast = Toast::error("Please enter a valid email address.");
    assert_eq!(toast.title, "Error");
    assert_eq!(toast.severity, Severity::Error);
}

#[test]
fn starts_hidden() {
    assert!(ToastState::new().visible().is_none());
}

#[test]
fn show_makes_toast_visible() {
    let mut state = ToastState::new();
    state.show(Toast::success("Message Sent!", "thanks"));
    assert_eq!(state.visible().map(|t| t.title.as_str()), Some("Message Sent!"));
}

#[test]
fn timer_ticket_hides_toast() {
    let mut state = ToastState::new();
    let ticket = state.show(Toast::error("oops"));
    assert!(state.expire(ticket));
    assert!(state.visible().is_none());
    assert!(!state.expire(ticket));
}

#[test]
fn newer_toast_survives_older_timer() {
    let mut state = ToastState::new();
    let first = state.show(Toast::error("first"));
    let second = state.show(Toast::success("Message Sent!", "second"));

    assert!(!state.expire(first));
    assert_eq!(state.visible().map(|t| t.description.as_str()), Some("second"));
    assert!(state.expire(second));
}

#[test]
fn auto_hide_window_is_five_seconds() {
    assert_eq!(crate::config::SiteConfig::default().toast_duration_ms, 5000);
}
