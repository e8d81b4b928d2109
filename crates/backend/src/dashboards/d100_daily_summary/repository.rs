use anyhow::Result;
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};
use contracts::domain::a001_order::{Order, PaymentMethod};

use crate::domain::a001_order::repository as orders;

/// Shop timezone, same UTC+3 the request log prints in
const TZ_OFFSET_HOURS: i32 = 3;

/// Day bounds [00:00 of `date`, 00:00 of the next day) in shop-local time,
/// converted to UTC for the created_at comparison. The dashboard date picker
/// works in local days, so a late-evening order must not slide into the
/// next UTC day.
pub fn day_range(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let offset = FixedOffset::east_opt(TZ_OFFSET_HOURS * 3600).expect("valid offset");
    let start = date
        .and_hms_opt(0, 0, 0)
        .expect("midnight")
        .and_local_timezone(offset)
        .single()
        .expect("fixed offset")
        .with_timezone(&Utc);
    (start, start + Duration::days(1))
}

/// Orders of one calendar day, newest first, optionally filtered by payment
/// method. The filter is part of the query, not applied client-side.
pub async fn orders_for_day(
    date: NaiveDate,
    payment_method: Option<PaymentMethod>,
) -> Result<Vec<Order>> {
    let (from, to) = day_range(date);
    orders::list_for_range(from, to, payment_method).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn day_range_spans_exactly_one_day() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let (from, to) = day_range(date);
        // Local midnight is 21:00 UTC of the previous day
        assert_eq!(from.to_rfc3339(), "2025-05-31T21:00:00+00:00");
        assert_eq!(to - from, Duration::days(1));
    }

    #[test]
    fn early_morning_order_belongs_to_its_local_day() {
        // 00:30 local on June 2 is 21:30 UTC on June 1
        let created = Utc.with_ymd_and_hms(2025, 6, 1, 21, 30, 0).unwrap();

        let june_2 = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let (from, to) = day_range(june_2);
        assert!(created >= from && created < to);

        let june_1 = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let (from, to) = day_range(june_1);
        assert!(created >= to || created < from);
    }
}
