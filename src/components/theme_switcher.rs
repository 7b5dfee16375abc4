//! Theme selector buttons bound to the document body.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::config::SiteConfig;
use crate::consts::{THEME_ATTR, THEME_BUTTON_SELECTOR};
use crate::error::PortfolioError;
use crate::state::theme::{Theme, ThemeController};
use crate::util::dom::{Listener, query_all, with_attr};
use crate::util::storage::LocalStorage;

pub struct ThemeSwitcher {
    controller: Rc<RefCell<ThemeController<LocalStorage>>>,
    _listeners: Vec<Listener>,
}

impl ThemeSwitcher {
    /// Apply the persisted theme and listen for selector clicks.
    ///
    /// # Errors
    ///
    /// Fails when the document has no body or a listener cannot be attached.
    pub fn mount(document: &Document, config: &SiteConfig) -> Result<Self, PortfolioError> {
        let root: Element = document.body().ok_or(PortfolioError::NoDocument)?.into();
        let buttons = with_attr(query_all(document, THEME_BUTTON_SELECTOR), THEME_ATTR);

        let controller = ThemeController::load(LocalStorage, &config.storage_key, config.default_theme);
        controller.render(&root, &buttons);
        log::debug!("theme restored: {}", controller.current());
        let controller = Rc::new(RefCell::new(controller));

        let mut listeners = Vec::with_capacity(buttons.len());
        for (button, _) in &buttons {
            let controller = Rc::clone(&controller);
            let document = document.clone();
            let clicked = button.clone();
            let root = root.clone();
            listeners.push(Listener::attach(button, "click", move |_event| {
                let Some(name) = clicked.get_attribute(THEME_ATTR) else {
                    log::debug!("theme button without {THEME_ATTR}");
                    return;
                };
                // Rescan: buttons present now, not at mount.
                let buttons = with_attr(query_all(&document, THEME_BUTTON_SELECTOR), THEME_ATTR);
                if let Err(err) = controller.borrow_mut().set_theme(&name, &root, &buttons) {
                    log::warn!("theme change rejected: {err}");
                }
            })?);
        }

        Ok(Self { controller, _listeners: listeners })
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.controller.borrow().current()
    }
}
