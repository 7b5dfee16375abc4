//! Contact form submit handling.

use wasm_bindgen::JsCast;
use web_sys::{Document, FormData, HtmlFormElement};

use crate::components::toast::{SharedToast, ToastView};
use crate::consts::CONTACT_FORM_ID;
use crate::error::PortfolioError;
use crate::state::contact::{ContactSubmission, review};
use crate::util::dom::Listener;

pub struct ContactForm {
    _listener: Option<Listener>,
}

fn read_submission(form: &HtmlFormElement) -> Result<ContactSubmission, PortfolioError> {
    let data = FormData::new_with_form(form)?;
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    Ok(ContactSubmission {
        name: field("name"),
        email: field("email"),
        subject: field("subject"),
        message: field("message"),
    })
}

impl ContactForm {
    /// Validate submissions in place and report through `toast`.
    ///
    /// # Errors
    ///
    /// Fails when the submit listener cannot be attached.
    pub fn mount(document: &Document, toast: Option<SharedToast>) -> Result<Self, PortfolioError> {
        let Some(form) = document
            .get_element_by_id(CONTACT_FORM_ID)
            .and_then(|element| element.dyn_ref::<HtmlFormElement>().cloned())
        else {
            log::debug!("no #{CONTACT_FORM_ID}; contact form idle");
            return Ok(Self { _listener: None });
        };

        let target = form.clone();
        let listener = Listener::attach(&form, "submit", move |event| {
            event.prevent_default();
            let submission = match read_submission(&target) {
                Ok(submission) => submission,
                Err(err) => {
                    log::warn!("contact form unreadable: {err}");
                    return;
                }
            };
            let outcome = review(&submission);
            if let Some(toast) = &toast {
                ToastView::show(toast, outcome.toast);
            }
            if outcome.reset_form {
                target.reset();
            }
        })?;

        Ok(Self { _listener: Some(listener) })
    }
}
