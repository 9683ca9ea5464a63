use serde::{Deserialize, Serialize};

use crate::record::MetricValue;

/// Direction shown by a card's trend marker.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    #[serde(other)]
    Neutral,
}

impl Trend {
    /// Derives a direction from the sign of a delta.
    ///
    /// Text deltas may carry a leading sign, currency symbols, thousands
    /// separators and a unit suffix ("+5%", "-$1,200", "3 ms"). Anything
    /// without a non-zero magnitude is neutral.
    pub fn from_delta(delta: &MetricValue) -> Self {
        match delta {
            MetricValue::Number(n) => Self::from_sign(*n),
            MetricValue::Text(s) => parse_signed_magnitude(s)
                .map(Self::from_sign)
                .unwrap_or(Trend::Neutral),
            MetricValue::Flag(_) => Trend::Neutral,
        }
    }

    /// Direction by name, case-insensitive; unknown names are neutral.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "up" => Trend::Up,
            "down" => Trend::Down,
            _ => Trend::Neutral,
        }
    }

    fn from_sign(n: f64) -> Self {
        if n > 0.0 {
            Trend::Up
        } else if n < 0.0 {
            Trend::Down
        } else {
            // zero and NaN
            Trend::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Neutral => "neutral",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Trend::Up => "\u{25B2}",
            Trend::Down => "\u{25BC}",
            Trend::Neutral => "\u{25CF}",
        }
    }
}

fn parse_signed_magnitude(text: &str) -> Option<f64> {
    let mut negative = false;
    let mut digits = String::new();

    let mut chars = text.trim().chars().peekable();
    while let Some(ch) = chars.next() {
        if digits.is_empty() {
            match ch {
                '+' => negative = false,
                '-' | '\u{2212}' => negative = true,
                c if c.is_ascii_digit() => digits.push(c),
                _ => {}
            }
        } else {
            match ch {
                c if c.is_ascii_digit() => digits.push(c),
                // a trailing full stop ends the number
                '.' if chars.peek().is_some_and(|next| next.is_ascii_digit()) => digits.push('.'),
                ',' => {}
                _ => break,
            }
        }
    }

    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.parse::<f64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
