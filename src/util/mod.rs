//! Browser seams shared by the page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module exposes a small plain-Rust surface (traits, option structs)
//! and keeps its `web-sys` glue behind the `hydrate` feature, so component
//! logic can be exercised natively.

pub mod dom;
pub mod observer;
pub mod storage;
