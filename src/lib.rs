//! # portfolio
//!
//! Interactivity for a single-page personal portfolio, compiled to
//! WebAssembly. The page markup and stylesheet are fixed; this crate binds
//! to them and adds theme switching, section-aware navigation, entrance
//! animations, skill-bar fills, image fallbacks, and a validated contact
//! form with toast feedback.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Browser-free models: theme, active section, toast, form validation |
//! | [`util`] | Storage, DOM mutation traits, visibility subscriptions |
//! | `components` | `web-sys` bindings, one per behavior (`hydrate` only) |
//! | `app` | Startup routine and page-lifetime ownership (`hydrate` only) |
//! | [`config`] | Tunable timings and thresholds |
//! | [`consts`] | Selectors, attributes, and defaults the page contract fixes |

pub mod config;
pub mod consts;
pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod components;

#[cfg(test)]
mod test_support;
