use serde::{Deserialize, Serialize};

/// How to format a numeric value on a KPI card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

impl ValueFormat {
    /// Brazilian real, the currency every money metric here is reported in
    pub fn brl() -> Self {
        ValueFormat::Money {
            currency: "R$".to_string(),
        }
    }
}

/// Visual status of an indicator (drives the card colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
}
