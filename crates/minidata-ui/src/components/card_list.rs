use leptos::logging::warn;
use leptos::prelude::*;
use minidata_types::{card_keys, duplicate_titles, MetricRecord};

use crate::components::metric_card::MetricCard;

/// Renders one [`MetricCard`] per record, in input order.
///
/// Cards are keyed by title. Repeated titles still render; their keys get
/// an occurrence suffix so the list stays addressable.
#[component]
pub fn CardList(
    /// Records to display
    records: Vec<MetricRecord>,
) -> impl IntoView {
    for title in duplicate_titles(&records) {
        warn!("duplicate card title {title:?}, keying repeats by occurrence");
    }

    let keyedRecords: Vec<(String, MetricRecord)> =
        card_keys(&records).into_iter().zip(records).collect();

    view! {
        <div class="card-list">
            <For
                each=move || keyedRecords.clone()
                key=|(key, _)| key.clone()
                let:entry
            >
                <MetricCard record=entry.1 />
            </For>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{render_to_html, value_colors};

    fn list_for(records: Vec<MetricRecord>) -> String {
        render_to_html(move || view! { <CardList records=records /> })
    }

    fn card_count(html: &str) -> usize {
        html.matches("class=\"metric-card\"").count()
    }

    fn sample() -> Vec<MetricRecord> {
        vec![
            MetricRecord::new("Revenue", "$1,000", "+5%").with_color("green"),
            MetricRecord::new("Costs", "$400", "-2%").with_color("red"),
        ]
    }

    #[test]
    fn renders_one_card_per_record_in_order() {
        let html = list_for(sample());

        assert_eq!(card_count(&html), 2, "{html}");
        let revenue = html.find(">Revenue<").expect("revenue card");
        let costs = html.find(">Costs<").expect("costs card");
        assert!(revenue < costs);
    }

    #[test]
    fn revenue_and_costs_scenario() {
        let html = list_for(sample());

        assert_eq!(
            value_colors(&html),
            vec![Some("green".to_string()), Some("red".to_string())],
            "{html}"
        );

        let (first, second) = html.split_at(html.find(">Costs<").expect("costs card"));
        assert!(first.contains(">$1,000<"), "{first}");
        assert!(first.contains(">+5%<"), "{first}");
        assert!(first.contains("data-trend=\"up\""), "{first}");
        assert!(second.contains(">$400<"), "{second}");
        assert!(second.contains(">-2%<"), "{second}");
        assert!(second.contains("data-trend=\"down\""), "{second}");
    }

    #[test]
    fn empty_input_renders_empty_container() {
        let html = list_for(Vec::new());
        assert!(html.contains("class=\"card-list\""), "{html}");
        assert_eq!(card_count(&html), 0);
    }

    #[test]
    fn uncolored_records_fall_back_to_host_color() {
        let records = vec![
            MetricRecord::new("Plain", "7", "0"),
            MetricRecord::new("Tinted", "8", "+1").with_color("orange"),
        ];
        let html = list_for(records);
        assert_eq!(card_count(&html), 2);
        assert_eq!(value_colors(&html), vec![None, Some("orange".to_string())]);
    }

    #[test]
    fn many_records_keep_their_count() {
        let records: Vec<MetricRecord> = (0..25)
            .map(|i| MetricRecord::new(format!("Metric {i}"), i as f64, (i as f64) - 12.0))
            .collect();
        let html = list_for(records);
        assert_eq!(card_count(&html), 25);
        assert!(html.find(">Metric 3<") < html.find(">Metric 24<"));
    }

    #[test]
    fn duplicate_titles_both_render() {
        let records = vec![
            MetricRecord::new("X", "1", "+1"),
            MetricRecord::new("X", "2", "-1"),
        ];
        let html = list_for(records);
        assert_eq!(card_count(&html), 2);
        assert_eq!(html.matches(">X<").count(), 2);
    }

    #[test]
    fn rendering_is_idempotent() {
        assert_eq!(list_for(sample()), list_for(sample()));
    }

    #[test]
    fn input_is_left_untouched() {
        let records = sample();
        let snapshot = records.clone();
        let _ = list_for(records.clone());
        assert_eq!(records, snapshot);
    }
}
