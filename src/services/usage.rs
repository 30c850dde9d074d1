//! Usage logging and the per-day series behind the dashboard charts.
//!
//! DESIGN
//! ======
//! Writes are fire-and-forget: a lost usage log must never interrupt the
//! user, so insert failures are trace-logged and swallowed. Reads fetch a
//! rolling window from the data API and reduce it client-side into one
//! point per UTC day, which is the shape the chart widgets consume.

use std::collections::BTreeMap;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::{Date, Duration, OffsetDateTime, UtcOffset};
use uuid::Uuid;

use crate::backend::{self, ApiClient};
use crate::notify::{Notice, NotificationSink};

const TABLE: &str = "usage_logs";

/// One recorded activity session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageLog {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Seconds spent in the activity.
    pub session_duration: i64,
    pub activity_type: String,
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
}

/// One chart point: ISO date (`YYYY-MM-DD`) and the summed duration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsagePoint {
    pub date: String,
    pub value: i64,
}

#[derive(Serialize)]
struct InsertBody<'a> {
    session_duration: i64,
    activity_type: &'a str,
}

/// Record one activity session. Returns whether the insert succeeded; the
/// platform fills in `user_id` and `recorded_at` from the session.
pub async fn log_usage(
    api: &ApiClient,
    access_token: Option<&str>,
    duration_secs: i64,
    activity_type: &str,
) -> bool {
    let result = backend::send_no_content(
        api.request(Method::POST, &api.rest_url(TABLE), access_token)
            .json(&InsertBody { session_duration: duration_secs, activity_type }),
    )
    .await;

    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, activity = activity_type, "usage log insert failed");
            false
        }
    }
}

/// Fetch the last `days` of usage, optionally filtered by activity type,
/// summed per UTC day in ascending date order. Fetch failures report a
/// notice and yield an empty series.
pub async fn usage_series(
    api: &ApiClient,
    sink: &dyn NotificationSink,
    access_token: Option<&str>,
    days: i64,
    activity_type: Option<&str>,
) -> Vec<UsagePoint> {
    let since = OffsetDateTime::now_utc() - Duration::days(days);
    let result = backend::send_json::<Vec<UsageLog>>(
        api.request(Method::GET, &api.rest_url(TABLE), access_token)
            .query(&window_query(since, activity_type)),
    )
    .await;

    match result {
        Ok(logs) => daily_totals(&logs),
        Err(err) => {
            tracing::warn!(error = %err, "usage fetch failed");
            sink.report(Notice::failure("Error fetching usage data", err.to_string()));
            Vec::new()
        }
    }
}

/// Query pairs for the rolling window fetch.
fn window_query(since: OffsetDateTime, activity_type: Option<&str>) -> Vec<(String, String)> {
    let mut query = vec![
        ("select".to_owned(), "*".to_owned()),
        ("recorded_at".to_owned(), format!("gte.{}", rfc3339(since))),
    ];
    if let Some(activity) = activity_type {
        query.push(("activity_type".to_owned(), format!("eq.{activity}")));
    }
    query
}

/// Sum `session_duration` per UTC day. Pure; the `BTreeMap` keeps the
/// series in ascending date order.
#[must_use]
pub fn daily_totals(logs: &[UsageLog]) -> Vec<UsagePoint> {
    let mut by_day: BTreeMap<Date, i64> = BTreeMap::new();
    for log in logs {
        let day = log.recorded_at.to_offset(UtcOffset::UTC).date();
        *by_day.entry(day).or_default() += log.session_duration;
    }
    by_day
        .into_iter()
        .map(|(date, value)| UsagePoint { date: iso_date(date), value })
        .collect()
}

fn iso_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

fn rfc3339(ts: OffsetDateTime) -> String {
    ts.format(&Rfc3339).unwrap_or_default()
}

#[cfg(test)]
#[path = "usage_test.rs"]
mod tests;
