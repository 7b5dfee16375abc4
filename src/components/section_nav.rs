//! Nav-link highlighting driven by which section is in view.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Document;

use crate::config::SiteConfig;
use crate::consts::{NAV_LINK_SELECTOR, SECTION_SELECTOR};
use crate::error::PortfolioError;
use crate::state::sections::{SectionTracker, highlight_links};
use crate::util::dom::{query_all, with_attr};
use crate::util::observer::{ObserverOptions, RootMargin, Subscription};

pub struct SectionNav {
    tracker: Rc<RefCell<SectionTracker>>,
    _subscription: Subscription,
}

impl SectionNav {
    /// Observe every `section[id]`. Call once the sections are in the document.
    ///
    /// # Errors
    ///
    /// Fails when the observer cannot be created.
    pub fn mount(document: &Document, config: &SiteConfig) -> Result<Self, PortfolioError> {
        let sections = query_all(document, SECTION_SELECTOR);
        let tracker = Rc::new(RefCell::new(SectionTracker::new(&config.initial_section)));
        let options = ObserverOptions::new(config.section_threshold)
            .with_margin(RootMargin::vertical_inset(config.section_margin_px));

        let document = document.clone();
        let state = Rc::clone(&tracker);
        let subscription = Subscription::observe(&sections, options, move |batch, _observer| {
            let reports = batch
                .iter()
                .map(|sighting| (sighting.target.id(), sighting.is_intersecting))
                .collect::<Vec<_>>();
            let mut tracker = state.borrow_mut();
            if let Some(active) = tracker.observe(reports.iter().map(|(id, hit)| (id.as_str(), *hit))) {
                let links = with_attr(query_all(&document, NAV_LINK_SELECTOR), "href");
                highlight_links(&links, active);
            }
        })?;

        log::debug!("tracking {} sections", sections.len());
        Ok(Self { tracker, _subscription: subscription })
    }

    #[must_use]
    pub fn active(&self) -> String {
        self.tracker.borrow().active().to_owned()
    }
}
