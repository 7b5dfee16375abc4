//! The page's single toast element.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::config::SiteConfig;
use crate::consts::{
    TOAST_DESCRIPTION_SELECTOR, TOAST_ICON_SELECTOR, TOAST_ID, TOAST_TITLE_SELECTOR, TOAST_VISIBLE_CLASS,
};
use crate::state::toast::{Toast, ToastState};
use crate::util::dom::{ClassTarget, StyleTarget};

pub type SharedToast = Rc<RefCell<ToastView>>;

pub struct ToastView {
    element: Element,
    title: Option<Element>,
    description: Option<Element>,
    icon: Option<Element>,
    state: ToastState,
    duration_ms: u32,
    hide_timer: Option<Timeout>,
}

fn child(parent: &Element, selector: &str) -> Option<Element> {
    match parent.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::debug!("toast selector {selector} rejected: {err:?}");
            None
        }
    }
}

impl ToastView {
    /// Locate `#toast` and its parts. Returns `None` when the page has no toast.
    #[must_use]
    pub fn find(document: &Document, config: &SiteConfig) -> Option<SharedToast> {
        let element = document.get_element_by_id(TOAST_ID)?;
        Some(Rc::new(RefCell::new(Self {
            title: child(&element, TOAST_TITLE_SELECTOR),
            description: child(&element, TOAST_DESCRIPTION_SELECTOR),
            icon: child(&element, TOAST_ICON_SELECTOR),
            element,
            state: ToastState::new(),
            duration_ms: config.toast_duration_ms,
            hide_timer: None,
        })))
    }

    /// Show `toast` and restart the auto-hide countdown.
    pub fn show(this: &SharedToast, toast: Toast) {
        let mut view = this.borrow_mut();
        if let Some(title) = &view.title {
            title.set_text_content(Some(&toast.title));
        }
        if let Some(description) = &view.description {
            description.set_text_content(Some(&toast.description));
        }
        if let Some(icon) = &view.icon {
            icon.set_class_name(toast.severity.icon_class());
            icon.set_style("color", toast.severity.icon_color());
        }
        view.element.add_class(TOAST_VISIBLE_CLASS);

        let ticket = view.state.show(toast);
        let duration_ms = view.duration_ms;
        let weak: Weak<RefCell<Self>> = Rc::downgrade(this);
        // Replacing the handle cancels the previous countdown.
        view.hide_timer = Some(Timeout::new(duration_ms, move || {
            let Some(this) = weak.upgrade() else {
                return;
            };
            let mut view = this.borrow_mut();
            if view.state.expire(ticket) {
                view.element.remove_class(TOAST_VISIBLE_CLASS);
            }
        }));
    }
}
