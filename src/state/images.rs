//! Broken-image fallback swap.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

use crate::util::dom::StyleTarget;

/// Hide `image` and show `fallback`, when one is available.
pub fn swap_to_fallback<I: StyleTarget, F: StyleTarget>(image: &I, fallback: Option<&F>) {
    image.set_style("display", "none");
    if let Some(fallback) = fallback {
        fallback.set_style("display", "flex");
    }
}

/// Whether a `class` attribute value contains `marker` as a whole token.
#[must_use]
pub fn has_class_token(class_attr: Option<&str>, marker: &str) -> bool {
    class_attr.is_some_and(|classes| classes.split_whitespace().any(|token| token == marker))
}
