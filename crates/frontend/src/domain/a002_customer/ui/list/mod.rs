//! Customer directory list
//!
//! - model.rs: API functions
//! - view.rs: Leptos component with the details dialog wired in

mod model;
mod view;

pub use view::CustomerListPage;
