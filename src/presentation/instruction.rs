use serde::{Deserialize, Serialize};

/// A scalar that alert sources deliver either as a JSON number or as a
/// numeric string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    /// Plain JSON number
    Number(f64),
    /// Stringified number, possibly empty
    Text(String),
}

impl Scalar {
    /// Numeric value, if one can be read. Empty and non-numeric strings
    /// count as unset.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

/// A boolean-like flag: JSON bool, number (non-zero is true) or a string
/// token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Toggle {
    /// Plain JSON boolean
    Flag(bool),
    /// Numeric flag, non-zero meaning true
    Number(f64),
    /// String token such as "yes" or "off"
    Text(String),
}

impl Toggle {
    /// Coerces the flag to a bool. Recognised true tokens are
    /// true/1/yes/y/on, false tokens false/0/no/n/off; anything else falls
    /// back to `default`.
    pub fn as_bool(&self, default: bool) -> bool {
        match self {
            Toggle::Flag(b) => *b,
            Toggle::Number(n) => *n != 0.0,
            Toggle::Text(s) => match s.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" | "y" | "on" => true,
                "false" | "0" | "no" | "n" | "off" => false,
                _ => default,
            },
        }
    }
}

/// Inbound trade instruction as decoded from a webhook alert.
///
/// Every field is optional at this layer; the normalizer applies defaults,
/// derives close semantics and rejects incomplete instructions. Empty
/// strings are treated the same as absent fields throughout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Instruction {
    /// OPEN, CLOSE_LONG or CLOSE_SHORT; defaults to OPEN
    #[serde(default)]
    pub action: Option<String>,
    /// Instrument epic; always required
    #[serde(default)]
    pub epic: Option<String>,
    /// BUY or SELL; required for OPEN, derived for CLOSE_*
    #[serde(default)]
    pub direction: Option<String>,
    /// Order size; defaults to 1
    #[serde(default)]
    pub size: Option<Scalar>,
    /// MARKET or LIMIT; defaults to MARKET
    #[serde(default)]
    pub order_type: Option<String>,
    /// Price level, required for LIMIT orders
    #[serde(default)]
    pub level: Option<Scalar>,
    /// Take-profit distance
    #[serde(default)]
    pub limit_distance: Option<Scalar>,
    /// Take-profit level
    #[serde(default)]
    pub limit_level: Option<Scalar>,
    /// Stop-loss distance
    #[serde(default)]
    pub stop_distance: Option<Scalar>,
    /// Stop-loss level
    #[serde(default)]
    pub stop_level: Option<Scalar>,
    /// Whether the stop is broker-guaranteed
    #[serde(default)]
    pub guaranteed_stop: Option<Toggle>,
    /// Whether the stop trails favourable price movement
    #[serde(default)]
    pub trailing_stop: Option<Toggle>,
    /// Increment for a trailing stop
    #[serde(default)]
    pub trailing_stop_increment: Option<Scalar>,
    /// Whether to force open a new position; defaults to true for OPEN
    #[serde(default)]
    pub force_open: Option<Toggle>,
    /// Currency code for the order
    #[serde(default)]
    pub currency_code: Option<String>,
    /// Instrument expiry; defaults to "-"
    #[serde(default)]
    pub expiry: Option<String>,
    /// Order duration token
    #[serde(default)]
    pub time_in_force: Option<String>,
    /// Expiry date for GOOD_TILL_DATE orders
    #[serde(default)]
    pub good_till_date: Option<String>,
    /// Quote identifier for quoted orders
    #[serde(default)]
    pub quote_id: Option<String>,
}
