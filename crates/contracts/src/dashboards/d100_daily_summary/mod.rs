pub mod dto;

pub use dto::{DailySummaryRequest, DailySummaryResponse};
