//! Transient notification content and auto-hide bookkeeping.
//!
//! DESIGN
//! ======
//! One toast element is reused for every message. Each `show` issues a new
//! ticket; an auto-hide timer only hides the toast if its ticket is still
//! the latest, so an older timer never cuts a newer message short.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// Icon font classes for the toast icon.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
        }
    }

    #[must_use]
    pub fn icon_color(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Toast {
    #[must_use]
    pub fn success(title: &str, description: &str) -> Self {
        Self { title: title.to_owned(), description: description.to_owned(), severity: Severity::Success }
    }

    #[must_use]
    pub fn error(description: &str) -> Self {
        Self { title: "Error".to_owned(), description: description.to_owned(), severity: Severity::Error }
    }
}

/// Identifies one `show` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    current: Option<Toast>,
    generation: u64,
}

impl ToastState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The toast on screen, if any.
    #[must_use]
    pub fn visible(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Show `toast`, replacing any current message. The caller schedules
    /// [`Self::expire`] with the returned ticket.
    pub fn show(&mut self, toast: Toast) -> Ticket {
        self.generation += 1;
        self.current = Some(toast);
        Ticket(self.generation)
    }

    /// An auto-hide timer fired. Returns whether the toast should be hidden.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }
}
