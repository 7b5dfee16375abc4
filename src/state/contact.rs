//! Contact form validation.
//!
//! TRADE-OFFS
//! ==========
//! Submissions are acknowledged on the page only; nothing is transmitted.
//! Subject is optional and never checked.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};

use crate::state::toast::Toast;

pub const SENT_TITLE: &str = "Message Sent!";
pub const SENT_DESCRIPTION: &str = "Thank you for your message! I'll get back to you soon.";

/// Field values read from the form at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl ContactSubmission {
    /// Check required fields first, then the email shape.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ValidationError::MissingRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// Whitespace as ECMAScript's `\s` class defines it: `WhiteSpace` plus
/// `LineTerminator`. Differs from [`char::is_whitespace`] on U+FEFF (included
/// here) and U+0085 (excluded here).
#[must_use]
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `local@domain.tld` shape: no whitespace, exactly one `@` with text on
/// both sides, and a `.` inside the domain with text on both sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_form_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// What the page should do after a submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub toast: Toast,
    pub reset_form: bool,
}

#[must_use]
pub fn review(submission: &ContactSubmission) -> Outcome {
    match submission.validate() {
        Ok(()) => Outcome { toast: Toast::success(SENT_TITLE, SENT_DESCRIPTION), reset_form: true },
        Err(err) => Outcome { toast: Toast::error(&err.to_string()), reset_form: false },
    }
}
