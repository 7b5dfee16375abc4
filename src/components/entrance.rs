//! Entrance animations for content blocks.

use web_sys::Document;

use crate::config::SiteConfig;
use crate::consts::ENTRANCE_SELECTORS;
use crate::error::PortfolioError;
use crate::state::entrance::{EntranceStyle, arm, on_sighting};
use crate::util::dom::query_all;
use crate::util::observer::{ObserverOptions, Subscription};

pub struct EntranceAnimations {
    _subscription: Subscription,
}

impl EntranceAnimations {
    /// Hide every animated block and reveal each on first sight.
    ///
    /// # Errors
    ///
    /// Fails when the observer cannot be created.
    pub fn mount(document: &Document, config: &SiteConfig) -> Result<Self, PortfolioError> {
        let style = EntranceStyle::from_config(config);
        let blocks = query_all(document, &ENTRANCE_SELECTORS.join(", "));
        let options = ObserverOptions::new(config.entrance_threshold);

        // Reports arrive asynchronously; blocks are concealed before the first one.
        let subscription = arm(&style, &blocks, |blocks| {
            Subscription::observe(blocks, options, |batch, observer| {
                for sighting in batch {
                    if on_sighting(&sighting.target, sighting.is_intersecting) {
                        observer.unobserve(&sighting.target);
                    }
                }
            })
        })?;

        log::debug!("animating {} blocks", blocks.len());
        Ok(Self { _subscription: subscription })
    }
}
