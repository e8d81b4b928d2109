pub mod a001_order;
pub mod a002_customer;
pub mod catalog;
pub mod d100_daily_summary;
