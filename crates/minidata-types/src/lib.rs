pub mod identity;
pub mod record;
pub mod trend;

pub use identity::*;
pub use record::*;
pub use trend::*;

/// The records a host serves, shared via Leptos context.
#[derive(Clone, Debug, Default)]
pub struct CardDeck(pub Vec<MetricRecord>);
