use serde::{Deserialize, Serialize};

use crate::domain::a001_order::{Order, PaymentMethod};

/// Query for the supervisor dashboard: one calendar day, optional payment filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummaryRequest {
    /// Calendar day in "YYYY-MM-DD"
    pub date: String,
    #[serde(rename = "paymentMethod")]
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummaryResponse {
    pub date: String,
    #[serde(rename = "orderCount")]
    pub order_count: usize,
    /// Sum of order totals, rubles
    #[serde(rename = "totalRevenue")]
    pub total_revenue: i64,
    /// Revenue / count; 0 when there are no orders
    #[serde(rename = "avgCheck")]
    pub avg_check: f64,
    /// Mean preparation duration over completed orders, seconds
    #[serde(rename = "avgPrepSeconds")]
    pub avg_prep_seconds: f64,
    /// Matching orders, newest first
    pub orders: Vec<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_filter_parses_from_the_wire_name() {
        let request: DailySummaryRequest =
            serde_json::from_str(r#"{"date":"2025-06-01","paymentMethod":"cash"}"#).unwrap();
        assert_eq!(request.payment_method, Some(PaymentMethod::Cash));

        let request: DailySummaryRequest =
            serde_json::from_str(r#"{"date":"2025-06-01"}"#).unwrap();
        assert_eq!(request.payment_method, None);
    }
}
