//! Element mutation traits and `web-sys` query/listener helpers.
//!
//! DESIGN
//! ======
//! Components mutate the page only through [`ClassTarget`] and
//! [`StyleTarget`]. The browser implementation lives on `web_sys::Element`;
//! tests implement the same traits on an in-memory element.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use crate::consts::LOADING_STATE;

/// Whether a `document.readyState` value means the markup is still parsing.
///
/// `"interactive"` and `"complete"` both mean the sections already exist.
#[must_use]
pub fn still_loading(ready_state: &str) -> bool {
    ready_state == LOADING_STATE
}

/// Something carrying a CSS class list.
pub trait ClassTarget {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    fn set_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

/// Something carrying inline style properties.
pub trait StyleTarget {
    fn set_style(&self, property: &str, value: &str);
}

impl<T: ClassTarget + ?Sized> ClassTarget for &T {
    fn add_class(&self, class: &str) {
        (**self).add_class(class);
    }

    fn remove_class(&self, class: &str) {
        (**self).remove_class(class);
    }
}

impl<T: StyleTarget + ?Sized> StyleTarget for &T {
    fn set_style(&self, property: &str, value: &str) {
        (**self).set_style(property, value);
    }
}

#[cfg(feature = "hydrate")]
pub use browser::*;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

    use super::{ClassTarget, StyleTarget};
    use crate::error::PortfolioError;

    impl ClassTarget for Element {
        fn add_class(&self, class: &str) {
            if let Err(err) = self.class_list().add_1(class) {
                log::debug!("add class {class} failed: {err:?}");
            }
        }

        fn remove_class(&self, class: &str) {
            if let Err(err) = self.class_list().remove_1(class) {
                log::debug!("remove class {class} failed: {err:?}");
            }
        }
    }

    impl StyleTarget for Element {
        fn set_style(&self, property: &str, value: &str) {
            let Some(html) = self.dyn_ref::<HtmlElement>() else {
                log::debug!("style {property} skipped on non-html element");
                return;
            };
            if let Err(err) = html.style().set_property(property, value) {
                log::debug!("set style {property} failed: {err:?}");
            }
        }
    }

    /// The browser window.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::NoWindow`] outside a window context.
    pub fn window() -> Result<Window, PortfolioError> {
        web_sys::window().ok_or(PortfolioError::NoWindow)
    }

    /// The page document.
    ///
    /// # Errors
    ///
    /// Returns an error when there is no window or document.
    pub fn document() -> Result<Document, PortfolioError> {
        window()?.document().ok_or(PortfolioError::NoDocument)
    }

    /// All elements matching `selector`, in document order. An invalid
    /// selector yields an empty list.
    #[must_use]
    pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
        let nodes = match document.query_selector_all(selector) {
            Ok(nodes) => nodes,
            Err(err) => {
                log::debug!("selector {selector} rejected: {err:?}");
                return Vec::new();
            }
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect()
    }

    /// First element matching `selector`. Missing elements and invalid
    /// selectors both yield `None`.
    #[must_use]
    pub fn query(document: &Document, selector: &str) -> Option<Element> {
        match document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::debug!("selector {selector} rejected: {err:?}");
                None
            }
        }
    }

    /// Pair each element with the value of `attr`, for the state-layer helpers.
    #[must_use]
    pub fn with_attr(elements: Vec<Element>, attr: &str) -> Vec<(Element, Option<String>)> {
        elements
            .into_iter()
            .map(|element| {
                let value = element.get_attribute(attr);
                (element, value)
            })
            .collect()
    }

    /// An attached event listener. Dropping it detaches the handler.
    pub struct Listener {
        target: EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    }

    impl Listener {
        /// Attach `handler` for `event` on `target`.
        ///
        /// # Errors
        ///
        /// Returns the JavaScript exception raised by `addEventListener`.
        pub fn attach(
            target: &EventTarget,
            event: &'static str,
            handler: impl FnMut(Event) + 'static,
        ) -> Result<Self, PortfolioError> {
            let callback = Closure::<dyn FnMut(Event)>::new(handler);
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
            Ok(Self { target: target.clone(), event, callback })
        }
    }

    impl Drop for Listener {
        fn drop(&mut self) {
            if let Err(err) = self
                .target
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
            {
                log::debug!("detach {} listener failed: {err:?}", self.event);
            }
        }
    }

    impl std::fmt::Debug for Listener {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Listener").field("event", &self.event).finish_non_exhaustive()
        }
    }
}
