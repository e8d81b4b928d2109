use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use contracts::dashboards::d100_daily_summary::{DailySummaryRequest, DailySummaryResponse};
use contracts::domain::a001_order::{Order, OrderStatus};

use super::repository;

pub async fn daily_summary(request: DailySummaryRequest) -> Result<DailySummaryResponse> {
    let date = NaiveDate::parse_from_str(&request.date, "%Y-%m-%d")
        .map_err(|_| anyhow!("Неверный формат даты: {}", request.date))?;

    let orders = repository::orders_for_day(date, request.payment_method).await?;
    Ok(summarize(request.date, orders))
}

/// Aggregates one day of orders. Revenue, count and average check cover
/// every order in the set; average preparation time covers completed
/// orders only, since an open order has no completion timestamp yet.
fn summarize(date: String, orders: Vec<Order>) -> DailySummaryResponse {
    let order_count = orders.len();
    let total_revenue: i64 = orders.iter().map(|o| o.total_price).sum();
    let avg_check = if order_count > 0 {
        total_revenue as f64 / order_count as f64
    } else {
        0.0
    };

    let prep_times: Vec<i64> = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Completed)
        .filter_map(|o| o.prep_duration_seconds())
        .collect();
    let avg_prep_seconds = if prep_times.is_empty() {
        0.0
    } else {
        prep_times.iter().sum::<i64>() as f64 / prep_times.len() as f64
    };

    DailySummaryResponse {
        date,
        order_count,
        total_revenue,
        avg_check,
        avg_prep_seconds,
        orders,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use contracts::domain::a001_order::PaymentMethod;

    fn completed_order(total: i64, prep_secs: i64) -> Order {
        let created = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
        Order {
            id: format!("order-{}", total),
            customer_name: "Гость".to_string(),
            customer_id: None,
            items: vec![],
            status: OrderStatus::Completed,
            created_at: created,
            completed_at: Some(created + Duration::seconds(prep_secs)),
            total_price: total,
            payment_method: PaymentMethod::Cash,
            estimated_prep_seconds: 300,
        }
    }

    #[test]
    fn two_completed_orders() {
        let summary = summarize(
            "2025-06-01".to_string(),
            vec![completed_order(250, 120), completed_order(320, 240)],
        );
        assert_eq!(summary.order_count, 2);
        assert_eq!(summary.total_revenue, 570);
        assert_eq!(summary.avg_check, 285.0);
        assert_eq!(summary.avg_prep_seconds, 180.0);
    }

    #[test]
    fn empty_day_is_all_zeroes() {
        let summary = summarize("2025-06-02".to_string(), vec![]);
        assert_eq!(summary.order_count, 0);
        assert_eq!(summary.total_revenue, 0);
        assert_eq!(summary.avg_check, 0.0);
        assert_eq!(summary.avg_prep_seconds, 0.0);
    }

    #[test]
    fn open_orders_count_toward_revenue_but_not_prep_time() {
        let mut open = completed_order(200, 0);
        open.status = OrderStatus::Preparing;
        open.completed_at = None;

        let summary = summarize(
            "2025-06-01".to_string(),
            vec![open, completed_order(300, 90)],
        );
        assert_eq!(summary.order_count, 2);
        assert_eq!(summary.total_revenue, 500);
        assert_eq!(summary.avg_prep_seconds, 90.0);
    }
}
