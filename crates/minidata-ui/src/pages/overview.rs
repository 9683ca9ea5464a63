use leptos::prelude::*;
use minidata_types::MetricRecord;

use crate::components::card_list::CardList;

#[server]
pub async fn get_cards() -> Result<Vec<MetricRecord>, ServerFnError> {
    use minidata_types::CardDeck;
    let deck = use_context::<CardDeck>().unwrap_or_default();
    Ok(deck.0)
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (cards, setCards) = signal(Option::<Result<Vec<MetricRecord>, String>>::None);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            let result = get_cards().await.map_err(|e| e.to_string());
            setCards.set(Some(result));
        });
    }

    view! {
        <div class="overview-header">
            <h1>"Overview"</h1>
            <p class="subtitle">"Key figures at a glance"</p>
        </div>
        {move || view! { <OverviewBody cards=cards.get() /> }}
    }
}

/// Loading, error or card list, depending on where the fetch is.
#[component]
fn OverviewBody(cards: Option<Result<Vec<MetricRecord>, String>>) -> impl IntoView {
    match cards {
        None => {
            view! {
                <div class="loading">
                    <div class="spinner"></div>
                    "Loading metrics..."
                </div>
            }
                .into_any()
        }
        Some(Ok(records)) => view! { <CardList records=records /> }.into_any(),
        Some(Err(e)) => {
            view! {
                <div class="card">
                    <p class="load-error">"Failed to load metrics: " {e}</p>
                </div>
            }
                .into_any()
        }
    }
}
