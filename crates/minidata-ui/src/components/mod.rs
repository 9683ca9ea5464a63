pub mod card_list;
pub mod metric_card;
pub mod trend_indicator;

pub use card_list::CardList;
pub use metric_card::MetricCard;
pub use trend_indicator::TrendIndicator;

#[cfg(test)]
pub(crate) fn render_to_html<V: leptos::prelude::IntoView>(view: impl FnOnce() -> V) -> String {
    use leptos::reactive::owner::Owner;

    let owner = Owner::new();
    owner.with(|| view().to_html())
}

/// Inline text color of every rendered value heading, in document order.
#[cfg(test)]
pub(crate) fn value_colors(html: &str) -> Vec<Option<String>> {
    html.split("<h1 ")
        .skip(1)
        .filter_map(|rest| {
            let tag = &rest[..rest.find('>')?];
            if !tag.contains("metric-value") {
                return None;
            }
            Some(tag.split("style=\"").nth(1).map(|style| {
                let style = &style[..style.find('"').unwrap_or(style.len())];
                style
                    .trim()
                    .trim_end_matches(';')
                    .trim_start_matches("color:")
                    .trim()
                    .to_string()
            }))
        })
        .collect()
}
