//! Page-session state models.
//!
//! DESIGN
//! ======
//! Each module holds the decisions for one component with no browser
//! dependency. The `components` layer feeds them DOM events and applies the
//! result.

pub mod contact;
pub mod entrance;
pub mod images;
pub mod nav;
pub mod sections;
pub mod skills;
pub mod theme;
pub mod toast;
