use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::trend::Trend;

/// One data point shown as a card.
///
/// Records are owned by the caller; components only read them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct MetricRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, alias = "data")]
    pub value: MetricValue,
    #[serde(
        default,
        deserialize_with = "lenient_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<String>,
    #[serde(default, alias = "diff")]
    pub delta: MetricValue,
    /// Explicit direction; derived from `delta` when absent.
    #[serde(
        default,
        deserialize_with = "lenient_trend",
        skip_serializing_if = "Option::is_none"
    )]
    pub trend: Option<Trend>,
}

impl MetricRecord {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<MetricValue>,
        delta: impl Into<MetricValue>,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            color: None,
            delta: delta.into(),
            trend: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }

    /// The color to apply to the value text, if any.
    ///
    /// Blank strings count as absent so the host default applies.
    pub fn value_color(&self) -> Option<&str> {
        self.color.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// Direction of the trend marker for this record.
    pub fn trend(&self) -> Trend {
        self.trend.unwrap_or_else(|| Trend::from_delta(&self.delta))
    }
}

/// A displayed figure: either a number or preformatted text.
///
/// Deserialization never fails on shape: null, arrays and tables become
/// empty text.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
    Flag(bool),
}

impl Default for MetricValue {
    fn default() -> Self {
        MetricValue::Text(String::new())
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(n) => write!(f, "{n}"),
            MetricValue::Text(s) => f.write_str(s),
            MetricValue::Flag(b) => write!(f, "{b}"),
        }
    }
}

impl<'de> Deserialize<'de> for MetricValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MetricValueVisitor)
    }
}

struct MetricValueVisitor;

impl<'de> Visitor<'de> for MetricValueVisitor {
    type Value = MetricValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, string or boolean")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(MetricValue::Flag(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(MetricValue::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(MetricValue::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(MetricValue::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(MetricValue::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(MetricValue::Text(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(MetricValue::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(MetricValue::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(MetricValueVisitor)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(MetricValue::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(MetricValue::default())
    }
}

/// Any scalar as its display string; anything else as empty text.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    MetricValue::deserialize(deserializer).map(|value| value.to_string())
}

fn lenient_color<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match MetricValue::deserialize(deserializer)? {
        MetricValue::Text(s) if s.is_empty() => None,
        value => Some(value.to_string()),
    })
}

/// Names map to a direction; non-text values leave it to the delta.
fn lenient_trend<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Trend>, D::Error> {
    Ok(match MetricValue::deserialize(deserializer)? {
        MetricValue::Text(name) if !name.trim().is_empty() => Some(Trend::from_name(&name)),
        _ => None,
    })
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Number(value)
    }
}

impl From<i64> for MetricValue {
    fn from(value: i64) -> Self {
        MetricValue::Number(value as f64)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Text(value.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        MetricValue::Text(value)
    }
}

impl From<bool> for MetricValue {
    fn from(value: bool) -> Self {
        MetricValue::Flag(value)
    }
}
