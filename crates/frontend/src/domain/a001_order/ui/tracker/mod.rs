//! Live order board for the barista station
//!
//! - model.rs: API functions (active orders, item ready, complete)
//! - view_model.rs: polling loop, elapsed clock, sound notification
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::TrackerPage;
pub use view_model::TrackerViewModel;
