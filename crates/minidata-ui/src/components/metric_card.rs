use leptos::prelude::*;
use minidata_types::MetricRecord;

use crate::components::trend_indicator::TrendIndicator;

/// Dark card showing one record: title, colored value, trend marker and delta.
#[component]
pub fn MetricCard(
    /// Record rendered by this card
    record: MetricRecord,
) -> impl IntoView {
    let title = record.title.clone();
    let value = record.value.to_string();
    let delta = record.delta.to_string();

    // Without a color the value inherits the host text color.
    let valueHeading = match record.value_color() {
        Some(color) => {
            view! { <h1 class="metric-value" style=format!("color: {color}")>{value}</h1> }
                .into_any()
        }
        None => view! { <h1 class="metric-value">{value}</h1> }.into_any(),
    };

    view! {
        <div class="metric-card">
            <h2 class="metric-title">{title}</h2>
            <div class="metric-body">
                {valueHeading}
                <TrendIndicator record=record />
                <h1 class="metric-delta">{delta}</h1>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{render_to_html, value_colors};

    fn card_for(record: MetricRecord) -> String {
        render_to_html(move || view! { <MetricCard record=record /> })
    }

    #[test]
    fn value_takes_record_color() {
        let html = card_for(MetricRecord::new("Revenue", "$1,000", "+5%").with_color("#76b900"));
        assert_eq!(value_colors(&html), vec![Some("#76b900".to_string())], "{html}");
        assert!(html.contains(">$1,000<"), "{html}");
        assert!(html.contains(">+5%<"), "{html}");
        assert!(html.contains(">Revenue<"), "{html}");
    }

    #[test]
    fn color_is_emitted_verbatim() {
        let html = card_for(MetricRecord::new("Revenue", "$1,000", "+5%").with_color(" green "));
        assert!(html.contains("color:  green "), "{html}");
    }

    #[test]
    fn missing_color_leaves_value_unstyled() {
        let html = card_for(MetricRecord::new("Costs", "$400", "-2%"));
        assert_eq!(value_colors(&html), vec![None], "{html}");
        assert!(!html.contains("style="), "{html}");
        assert!(html.contains(">$400<"), "{html}");
        assert!(html.contains("trend-indicator"), "{html}");
    }

    #[test]
    fn numeric_fields_render_as_text() {
        let html = card_for(MetricRecord::new("Orders", 1000.0, -3.0));
        assert!(html.contains(">1000<"), "{html}");
        assert!(html.contains(">-3<"), "{html}");
        assert!(html.contains("data-trend=\"down\""), "{html}");
    }
}
