//! Browser bindings for each page behavior.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every component looks up its own elements, wires its own listeners or
//! observers, and owns the handles that keep them alive. Components never
//! talk to each other except the contact form, which reports through the
//! shared toast. A missing element turns the component into a no-op.

pub mod contact_form;
pub mod entrance;
pub mod image_fallback;
pub mod navigation;
pub mod section_nav;
pub mod skill_bars;
pub mod theme_switcher;
pub mod toast;
