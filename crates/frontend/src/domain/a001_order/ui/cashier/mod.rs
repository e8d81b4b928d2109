//! Cashier screen
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (catalog, customers, order submit)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::CashierPage;
pub use view_model::CashierViewModel;
