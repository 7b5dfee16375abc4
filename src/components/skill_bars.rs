//! Skill-bar fill when the skills section scrolls into view.

use gloo_timers::callback::Timeout;
use web_sys::Document;

use crate::config::SiteConfig;
use crate::consts::{SKILL_BAR_SELECTOR, SKILL_WIDTH_ATTR, SKILLS_SECTION_SELECTOR};
use crate::error::PortfolioError;
use crate::state::skills::{SkillBarReveal, fill, target_width};
use crate::util::dom::{query, query_all};
use crate::util::observer::{ObserverOptions, RootMargin, Subscription};

pub struct SkillBars {
    _subscription: Option<Subscription>,
}

impl SkillBars {
    /// Watch the skills section. Without one on the page this does nothing.
    ///
    /// # Errors
    ///
    /// Fails when the observer cannot be created.
    pub fn mount(document: &Document, config: &SiteConfig) -> Result<Self, PortfolioError> {
        let Some(section) = query(document, SKILLS_SECTION_SELECTOR) else {
            log::debug!("no {SKILLS_SECTION_SELECTOR}; skill bars idle");
            return Ok(Self { _subscription: None });
        };

        let options = ObserverOptions::new(config.skills_threshold)
            .with_margin(RootMargin::bottom_inset(config.skills_bottom_margin_px));
        let delay_ms = config.skill_fill_delay_ms;
        let document = document.clone();
        let mut reveal = SkillBarReveal::new();

        let subscription = Subscription::observe(&[section], options, move |batch, observer| {
            for sighting in batch {
                if !reveal.trigger(sighting.is_intersecting) {
                    continue;
                }
                observer.unobserve(&sighting.target);
                for bar in query_all(&document, SKILL_BAR_SELECTOR) {
                    let Some(width) = target_width(bar.get_attribute(SKILL_WIDTH_ATTR)) else {
                        continue;
                    };
                    Timeout::new(delay_ms, move || fill(&bar, &width)).forget();
                }
            }
        })?;

        Ok(Self { _subscription: Some(subscription) })
    }
}
