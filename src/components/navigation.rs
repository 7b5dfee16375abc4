//! Smooth in-page scrolling, the mobile menu, and the hero parallax.
//!
//! DESIGN
//! ======
//! A link's `href` and its scroll target are both read at click time, so
//! links retargeted or sections added after startup still work. A target
//! that cannot be found is skipped.

use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

use crate::config::SiteConfig;
use crate::consts::{
    HERO_PROJECTS_BUTTON_SELECTOR, MOBILE_MENU_BUTTON_SELECTOR, MOBILE_MENU_OPEN_CLASS, MOBILE_MENU_SELECTOR,
    NAV_LINK_SELECTOR, PARALLAX_SELECTOR, PROJECTS_SECTION_ID,
};
use crate::error::PortfolioError;
use crate::state::nav::{closes_menu_on_resize, link_selector, parallax_transform, scroll_target};
use crate::util::dom::{ClassTarget, Listener, StyleTarget, query, query_all, window};

/// Smooth-scroll so `target` lands just below the sticky header.
///
/// # Errors
///
/// Fails when the window or its scroll position is unavailable.
pub fn scroll_to_element(target: &Element, header_offset: f64) -> Result<(), PortfolioError> {
    let window = window()?;
    let top = target.get_bounding_client_rect().top();
    let options = ScrollToOptions::new();
    options.set_top(scroll_target(top, window.scroll_y()?, header_offset));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Scroll to the element with `id`. Unknown ids do nothing.
///
/// # Errors
///
/// Fails when the document or window is unavailable.
pub fn scroll_to_section(id: &str, header_offset: f64) -> Result<(), PortfolioError> {
    let document = crate::util::dom::document()?;
    if let Some(target) = document.get_element_by_id(id) {
        scroll_to_element(&target, header_offset)
    } else {
        log::debug!("no section #{id} to scroll to");
        Ok(())
    }
}

fn close_mobile_menu(document: &Document) {
    if let Some(menu) = query(document, MOBILE_MENU_SELECTOR) {
        menu.remove_class(MOBILE_MENU_OPEN_CLASS);
    }
}

fn viewport_width(window: &Window) -> Option<f64> {
    match window.inner_width() {
        Ok(width) => width.as_f64(),
        Err(err) => {
            log::debug!("viewport width unavailable: {err:?}");
            None
        }
    }
}

pub struct Navigation {
    _listeners: Vec<Listener>,
}

impl Navigation {
    /// Wire nav links, the mobile menu toggle, the hero button, and the
    /// window scroll and resize handlers.
    ///
    /// # Errors
    ///
    /// Fails when the window is missing or a listener cannot be attached.
    pub fn mount(document: &Document, config: &SiteConfig) -> Result<Self, PortfolioError> {
        let window = window()?;
        let header_offset = config.header_offset_px;
        let mut listeners = Vec::new();

        for link in query_all(document, NAV_LINK_SELECTOR) {
            let document = document.clone();
            let clicked = link.clone();
            listeners.push(Listener::attach(&link, "click", move |event| {
                event.prevent_default();
                let href = clicked.get_attribute("href");
                let target = link_selector(href.as_deref()).and_then(|selector| query(&document, selector));
                if let Some(target) = target {
                    if let Err(err) = scroll_to_element(&target, header_offset) {
                        log::warn!("scroll failed: {err}");
                    }
                }
                close_mobile_menu(&document);
            })?);
        }

        if let (Some(button), Some(menu)) =
            (query(document, MOBILE_MENU_BUTTON_SELECTOR), query(document, MOBILE_MENU_SELECTOR))
        {
            listeners.push(Listener::attach(&button, "click", move |_event| {
                if let Err(err) = menu.class_list().toggle(MOBILE_MENU_OPEN_CLASS) {
                    log::debug!("mobile menu toggle failed: {err:?}");
                }
            })?);
        }

        if let Some(button) = query(document, HERO_PROJECTS_BUTTON_SELECTOR) {
            listeners.push(Listener::attach(&button, "click", move |_event| {
                if let Err(err) = scroll_to_section(PROJECTS_SECTION_ID, header_offset) {
                    log::warn!("scroll failed: {err}");
                }
            })?);
        }

        let parallax_doc = document.clone();
        let parallax_window = window.clone();
        let speed = config.parallax_speed;
        listeners.push(Listener::attach(&window, "scroll", move |_event| {
            let Some(overlay) = query(&parallax_doc, PARALLAX_SELECTOR) else {
                return;
            };
            match parallax_window.scroll_y() {
                Ok(scrolled) => overlay.set_style("transform", &parallax_transform(scrolled, speed)),
                Err(err) => log::debug!("scroll position unavailable: {err:?}"),
            }
        })?);

        let resize_doc = document.clone();
        let resize_window = window.clone();
        let breakpoint = config.mobile_breakpoint_px;
        listeners.push(Listener::attach(&window, "resize", move |_event| {
            if viewport_width(&resize_window).is_some_and(|width| closes_menu_on_resize(width, breakpoint)) {
                close_mobile_menu(&resize_doc);
            }
        })?);

        Ok(Self { _listeners: listeners })
    }
}
