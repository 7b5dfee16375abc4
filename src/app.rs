//! Startup routine and page-lifetime ownership.
//!
//! SYSTEM CONTEXT
//! ==============
//! `start` runs when the module is instantiated. It waits for the document
//! to finish parsing, mounts each component independently, and parks the
//! resulting handles in a thread-local so listeners and observers live as
//! long as the page.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

use crate::components::contact_form::ContactForm;
use crate::components::entrance::EntranceAnimations;
use crate::components::image_fallback::ImageFallbacks;
use crate::components::navigation::{self, Navigation};
use crate::components::section_nav::SectionNav;
use crate::components::skill_bars::SkillBars;
use crate::components::theme_switcher::ThemeSwitcher;
use crate::components::toast::ToastView;
use crate::config::SiteConfig;
use crate::consts::{CONFIG_ELEMENT_ID, HEADER_OFFSET_PX};
use crate::error::PortfolioError;
use crate::util::dom::{document, still_loading};

/// Everything mounted for the current page.
pub struct Page {
    config: SiteConfig,
    theme: Option<ThemeSwitcher>,
    sections: Option<SectionNav>,
    _navigation: Option<Navigation>,
    _entrance: Option<EntranceAnimations>,
    _skills: Option<SkillBars>,
    _images: Option<ImageFallbacks>,
    _contact: Option<ContactForm>,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

fn mounted<T>(component: &str, result: Result<T, PortfolioError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{component} not mounted: {err}");
            None
        }
    }
}

/// Read `#portfolio-config`, falling back to defaults when absent or invalid.
fn load_config(document: &Document) -> SiteConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            SiteConfig::default()
        }
    }
}

impl Page {
    /// Mount every component against `document`.
    #[must_use]
    pub fn mount(document: &Document) -> Self {
        let config = load_config(document);
        let toast = ToastView::find(document, &config);
        if toast.is_none() {
            log::debug!("no toast element; form feedback is silent");
        }

        Self {
            theme: mounted("theme switcher", ThemeSwitcher::mount(document, &config)),
            sections: mounted("section nav", SectionNav::mount(document, &config)),
            _navigation: mounted("navigation", Navigation::mount(document, &config)),
            _entrance: mounted("entrance animations", EntranceAnimations::mount(document, &config)),
            _skills: mounted("skill bars", SkillBars::mount(document, &config)),
            _images: mounted("image fallbacks", ImageFallbacks::mount(document)),
            _contact: mounted("contact form", ContactForm::mount(document, toast)),
            config,
        }
    }
}

fn boot() {
    let document = match document() {
        Ok(document) => document,
        Err(err) => {
            log::warn!("portfolio not started: {err}");
            return;
        }
    };
    let page = Page::mount(&document);
    log::info!(
        "portfolio ready: theme={}, section={}",
        page.theme.as_ref().map_or_else(|| "-".to_owned(), |theme| theme.current().to_string()),
        page.sections.as_ref().map_or_else(|| "-".to_owned(), SectionNav::active),
    );
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
}

/// Module entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&err.to_string().into());
    }

    let document = match document() {
        Ok(document) => document,
        Err(err) => {
            log::warn!("portfolio not started: {err}");
            return;
        }
    };
    if !still_loading(&document.ready_state()) {
        boot();
        return;
    }

    let on_ready = Closure::once_into_js(boot);
    if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        log::warn!("portfolio not started: {err:?}");
    }
}

/// Scroll to a section by id. Exposed to page scripts as `scrollToSection`.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(id: &str) {
    let header_offset = PAGE.with(|slot| {
        slot.borrow().as_ref().map_or(HEADER_OFFSET_PX, |page| page.config.header_offset_px)
    });
    if let Err(err) = navigation::scroll_to_section(id, header_offset) {
        log::warn!("scroll failed: {err}");
    }
}
