//! Notification metric definitions
//!
//! Recorded through the `metrics` facade; the host application decides
//! whether a recorder (Prometheus or otherwise) is installed.

use crate::domain::DispatchResult;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use std::time::Duration;

/// Register metric descriptions so exporters emit HELP/TYPE lines from startup
pub fn describe_metrics() {
    describe_counter!(
        "lancepay_notifications_sent_total",
        "Notification emails dispatched, by event type and outcome"
    );
    describe_histogram!(
        "lancepay_notifications_send_duration_seconds",
        "Time spent waiting on the email provider, in seconds"
    );
}

/// Record the outcome and latency of one dispatch
pub fn record_dispatch(event_type: &'static str, result: &DispatchResult, elapsed: Duration) {
    counter!(
        "lancepay_notifications_sent_total",
        "event" => event_type,
        "outcome" => result.outcome()
    )
    .increment(1);

    histogram!(
        "lancepay_notifications_send_duration_seconds",
        "event" => event_type
    )
    .record(elapsed.as_secs_f64());
}
