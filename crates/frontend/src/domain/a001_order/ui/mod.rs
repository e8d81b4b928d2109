pub mod cashier;
pub mod tracker;
