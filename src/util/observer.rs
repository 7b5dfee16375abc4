//! Viewport visibility subscriptions.
//!
//! DESIGN
//! ======
//! A [`Subscription`] owns one `IntersectionObserver` and its callback.
//! Batches are handed to the owner as plain [`Sighting`]s in delivery order,
//! together with the observer so targets can be released once handled.
//! Dropping the subscription disconnects the observer.

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

/// Viewport inset in CSS pixels. Negative values shrink the observed area.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    /// Shrink the viewport by `inset` at both top and bottom.
    #[must_use]
    pub fn vertical_inset(inset: f64) -> Self {
        Self { top: -inset, right: 0.0, bottom: -inset, left: 0.0 }
    }

    /// Shrink the viewport by `inset` at the bottom only.
    #[must_use]
    pub fn bottom_inset(inset: f64) -> Self {
        Self { bottom: -inset, ..Self::default() }
    }

    /// CSS shorthand in top/right/bottom/left order, e.g. `-80px 0px -80px 0px`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("{}px {}px {}px {}px", self.top, self.right, self.bottom, self.left)
    }
}

/// Visibility trigger settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    /// Visible fraction of the target, in `[0, 1]`, that counts as intersecting.
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl ObserverOptions {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold, root_margin: RootMargin::default() }
    }

    #[must_use]
    pub fn with_margin(mut self, root_margin: RootMargin) -> Self {
        self.root_margin = root_margin;
        self
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{Sighting, Subscription};

#[cfg(feature = "hydrate")]
mod browser {
    use js_sys::Array;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::ObserverOptions;
    use crate::error::PortfolioError;

    /// One visibility report for a watched element.
    #[derive(Clone, Debug)]
    pub struct Sighting {
        pub target: Element,
        pub is_intersecting: bool,
    }

    type BatchCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

    /// A live visibility observer.
    pub struct Subscription {
        observer: IntersectionObserver,
        _callback: BatchCallback,
    }

    impl Subscription {
        /// Watch `targets` and call `on_batch` with each delivered batch.
        ///
        /// # Errors
        ///
        /// Returns the JavaScript exception raised while constructing the observer.
        pub fn observe(
            targets: &[Element],
            options: ObserverOptions,
            mut on_batch: impl FnMut(&[Sighting], &IntersectionObserver) + 'static,
        ) -> Result<Self, PortfolioError> {
            let callback: BatchCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_ref::<IntersectionObserverEntry>().cloned())
                    .map(|entry| Sighting { target: entry.target(), is_intersecting: entry.is_intersecting() })
                    .collect::<Vec<_>>();
                on_batch(&batch, &observer);
            });

            let init = IntersectionObserverInit::new();
            init.set_threshold(&options.threshold.into());
            init.set_root_margin(&options.root_margin.to_css());
            let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
            for target in targets {
                observer.observe(target);
            }
            Ok(Self { observer, _callback: callback })
        }
    }

    impl Drop for Subscription {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    impl std::fmt::Debug for Subscription {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Subscription").finish_non_exhaustive()
        }
    }
}
