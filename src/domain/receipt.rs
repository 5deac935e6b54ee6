use crate::error::{ReceiptError, Result};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier handed out by the store when a receipt is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(pub u64);

impl ReceiptId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses an id taken from a request path. Anything that is not a
/// non-negative integer cannot name a stored receipt.
impl FromStr for ReceiptId {
    type Err = ReceiptError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| ReceiptError::NotFound(s.to_string()))
    }
}

/// A decimal amount exactly as it was written on the receipt.
///
/// The parsed value is used for arithmetic while the original text is kept,
/// because some scoring rules look at the cents digits as submitted
/// ("35.5" and "35.50" are not scored the same way).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money {
    amount: Decimal,
    text: String,
}

impl Money {
    /// Accepts `-?digits(.digits)?` whose value fits a `Decimal`.
    pub fn parse(text: &str) -> Result<Self> {
        if !is_decimal_literal(text) {
            return Err(ReceiptError::InvalidField(format!(
                "'{text}' is not a decimal amount"
            )));
        }
        let amount = Decimal::from_str(text)
            .map_err(|e| ReceiptError::InvalidField(format!("'{text}': {e}")))?;
        Ok(Self {
            amount,
            text: text.to_string(),
        })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// The digits after the decimal point, if the amount was written with one.
    pub fn cents(&self) -> Option<&str> {
        self.text.split_once('.').map(|(_, fraction)| fraction)
    }
}

// Optional sign, digits, then optionally a point followed by more digits.
fn is_decimal_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    digits(whole) && fraction.is_none_or(digits)
}

impl TryFrom<String> for Money {
    type Error = ReceiptError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Money> for String {
    fn from(money: Money) -> Self {
        money.text
    }
}

impl FromStr for Money {
    type Err = ReceiptError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: Money,
}

/// A submitted purchase receipt.
///
/// Every field is validated while deserializing, so a `Receipt` value always
/// carries a real calendar date, a 24h time and well-formed amounts.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    #[serde(with = "purchase_date")]
    pub purchase_date: NaiveDate,
    #[serde(with = "purchase_time")]
    pub purchase_time: NaiveTime,
    pub total: Money,
    pub items: Vec<Item>,
}

impl Receipt {
    /// Decodes and validates a JSON request body.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// Checks `raw` against a layout where `9` stands for any ASCII digit and
/// every other character must match literally.
fn has_layout(raw: &str, layout: &str) -> bool {
    raw.len() == layout.len()
        && raw.bytes().zip(layout.bytes()).all(|(c, l)| match l {
            b'9' => c.is_ascii_digit(),
            _ => c == l,
        })
}

mod purchase_date {
    use super::has_layout;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if !has_layout(&raw, "9999-99-99") {
            return Err(de::Error::custom(format!(
                "purchaseDate '{raw}': expected YYYY-MM-DD"
            )));
        }
        NaiveDate::parse_from_str(&raw, FORMAT)
            .map_err(|e| de::Error::custom(format!("purchaseDate '{raw}': {e}")))
    }
}

mod purchase_time {
    use super::has_layout;
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if !has_layout(&raw, "99:99") {
            return Err(de::Error::custom(format!(
                "purchaseTime '{raw}': expected HH:MM"
            )));
        }
        NaiveTime::parse_from_str(&raw, FORMAT)
            .map_err(|e| de::Error::custom(format!("purchaseTime '{raw}': {e}")))
    }
}
