use leptos::prelude::*;
use minidata_types::MetricRecord;

/// Directional marker for a single record.
///
/// Uses the record's explicit trend when set, otherwise the sign of its
/// delta. Anything unreadable falls back to the neutral marker.
#[component]
pub fn TrendIndicator(
    /// Record the marker describes
    record: MetricRecord,
) -> impl IntoView {
    let trend = record.trend();
    let direction = trend.as_str();

    view! {
        <span
            class=format!("trend-indicator trend-{direction}")
            data-trend=direction
        >
            {trend.glyph()}
        </span>
    }
}
