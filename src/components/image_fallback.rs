//! Fallback swap for the avatar and certificate images.

use web_sys::{Document, Element};

use crate::consts::{
    AVATAR_FALLBACK_SELECTOR, AVATAR_IMAGE_SELECTOR, CERTIFICATE_FALLBACK_CLASS, CERTIFICATE_IMAGE_SELECTOR,
};
use crate::error::PortfolioError;
use crate::state::images::{has_class_token, swap_to_fallback};
use crate::util::dom::{Listener, query, query_all};

pub struct ImageFallbacks {
    _listeners: Vec<Listener>,
}

impl ImageFallbacks {
    /// Listen for load errors on the avatar and every certificate image.
    ///
    /// # Errors
    ///
    /// Fails when a listener cannot be attached.
    pub fn mount(document: &Document) -> Result<Self, PortfolioError> {
        let mut listeners = Vec::new();

        if let Some(avatar) = query(document, AVATAR_IMAGE_SELECTOR) {
            let document = document.clone();
            let image = avatar.clone();
            listeners.push(Listener::attach(&avatar, "error", move |_event| {
                let fallback = query(&document, AVATAR_FALLBACK_SELECTOR);
                swap_to_fallback(&image, fallback.as_ref());
            })?);
        }

        for certificate in query_all(document, CERTIFICATE_IMAGE_SELECTOR) {
            let image = certificate.clone();
            listeners.push(Listener::attach(&certificate, "error", move |_event| {
                let fallback = image.next_element_sibling().filter(|next: &Element| {
                    has_class_token(next.get_attribute("class").as_deref(), CERTIFICATE_FALLBACK_CLASS)
                });
                swap_to_fallback(&image, fallback.as_ref());
            })?);
        }

        log::debug!("{} image fallbacks armed", listeners.len());
        Ok(Self { _listeners: listeners })
    }
}
