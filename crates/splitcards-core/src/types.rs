//! Core types for the split cards catalog

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A mana value or casting cost.
///
/// Card data carries these as JSON numbers, sometimes integral (`3`) and
/// sometimes with a fractional part (`0.5`, `3.0`). The wrapper guarantees
/// the value is finite and non-negative, which makes it totally ordered and
/// hashable so option lists can be built from sets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ManaValue(f64);

/// Rejected mana value input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidManaValue {
    #[error("mana value must not be negative (got {0})")]
    Negative(f64),

    #[error("mana value must be a finite number")]
    NotFinite,

    #[error("not a number: {0:?}")]
    Unparsable(String),
}

impl ManaValue {
    /// Create a mana value, rejecting negative and non-finite input.
    pub fn new(value: f64) -> Result<Self, InvalidManaValue> {
        if !value.is_finite() {
            return Err(InvalidManaValue::NotFinite);
        }
        if value < 0.0 {
            return Err(InvalidManaValue::Negative(value));
        }
        // Collapse -0.0 so equality and hashing agree.
        Ok(Self(value + 0.0))
    }

    /// The raw numeric value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ManaValue {
    type Error = InvalidManaValue;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ManaValue> for f64 {
    fn from(value: ManaValue) -> Self {
        value.0
    }
}

impl From<u32> for ManaValue {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl PartialEq for ManaValue {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for ManaValue {}

impl Hash for ManaValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for ManaValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ManaValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for ManaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64's Display already drops a zero fraction: 3.0 -> "3"
        write!(f, "{}", self.0)
    }
}

impl FromStr for ManaValue {
    type Err = InvalidManaValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| InvalidManaValue::Unparsable(s.to_string()))?;
        Self::new(value)
    }
}

/// One record of the split cards data file.
///
/// Field names follow the generated JSON exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Stable unique identifier, used as the render key
    pub oracle_id: String,
    /// Display name
    pub name: String,
    /// Mana value of the card
    pub mv: ManaValue,
    /// Image URL
    pub image: String,
    /// External detail page
    pub scryfall_uri: String,
    /// Casting-cost values this card can be played for
    pub casting_costs: Vec<ManaValue>,
    /// Symbolic mana costs, display metadata only
    #[serde(default)]
    pub mana_costs: Vec<String>,
}

impl Card {
    /// Whether this card can be cast for `cost`.
    pub fn has_casting_cost(&self, cost: ManaValue) -> bool {
        self.casting_costs.contains(&cost)
    }

    /// Whether this card matches a concrete (mv, casting cost) pair.
    pub fn matches(&self, mv: ManaValue, cost: ManaValue) -> bool {
        self.mv == mv && self.has_casting_cost(cost)
    }
}

/// The two dropdown selections. `None` is the unset placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub mv: Option<ManaValue>,
    pub casting_cost: Option<ManaValue>,
}

impl Selection {
    /// Create a selection from two optional values.
    pub fn new(mv: Option<ManaValue>, casting_cost: Option<ManaValue>) -> Self {
        Self { mv, casting_cost }
    }

    /// Both values chosen, if they are.
    pub fn both(&self) -> Option<(ManaValue, ManaValue)> {
        Some((self.mv?, self.casting_cost?))
    }

    /// True when both dropdowns hold a real value.
    pub fn is_complete(&self) -> bool {
        self.both().is_some()
    }
}

/// Interpret a `<select>` value. The placeholder sentinel (`-1`), any other
/// negative number and anything unparsable all mean "unset".
pub fn parse_selection(value: &str) -> Option<ManaValue> {
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(v: f64) -> ManaValue {
        ManaValue::new(v).unwrap()
    }

    #[test]
    fn test_mana_value_rejects_negative() {
        assert_eq!(ManaValue::new(-1.0), Err(InvalidManaValue::Negative(-1.0)));
        assert_eq!(ManaValue::new(f64::NAN), Err(InvalidManaValue::NotFinite));
        assert_eq!(
            ManaValue::new(f64::INFINITY),
            Err(InvalidManaValue::NotFinite)
        );
    }

    #[test]
    fn test_mana_value_negative_zero_equals_zero() {
        assert_eq!(mv(-0.0), mv(0.0));
    }

    #[test]
    fn test_mana_value_display() {
        assert_eq!(mv(3.0).to_string(), "3");
        assert_eq!(mv(0.5).to_string(), "0.5");
        assert_eq!(ManaValue::from(12).to_string(), "12");
    }

    #[test]
    fn test_mana_value_parse() {
        assert_eq!("4".parse::<ManaValue>().unwrap(), mv(4.0));
        assert_eq!(" 0.5 ".parse::<ManaValue>().unwrap(), mv(0.5));
        assert!("abc".parse::<ManaValue>().is_err());
        assert!("-1".parse::<ManaValue>().is_err());
    }

    #[test]
    fn test_mana_value_ordering() {
        let mut values = vec![mv(10.0), mv(2.0), mv(0.5), mv(3.0)];
        values.sort();
        assert_eq!(values, vec![mv(0.5), mv(2.0), mv(3.0), mv(10.0)]);
    }

    #[test]
    fn test_mana_value_deserializes_integers_and_floats() {
        let a: ManaValue = serde_json::from_str("3").unwrap();
        let b: ManaValue = serde_json::from_str("3.0").unwrap();
        assert_eq!(a, b);
        assert!(serde_json::from_str::<ManaValue>("-2").is_err());
        assert!(serde_json::from_str::<ManaValue>("\"3\"").is_err());
    }

    #[test]
    fn test_card_deserialize() {
        let line = r#"{"oracle_id":"a1","name":"Bolt","mv":1,"image":"i1","scryfall_uri":"u1","casting_costs":[1],"mana_costs":["R"]}"#;
        let card: Card = serde_json::from_str(line).unwrap();
        assert_eq!(card.oracle_id, "a1");
        assert_eq!(card.name, "Bolt");
        assert_eq!(card.mv, mv(1.0));
        assert_eq!(card.casting_costs, vec![mv(1.0)]);
        assert_eq!(card.mana_costs, vec!["R".to_string()]);
    }

    #[test]
    fn test_card_matches() {
        let card = Card {
            oracle_id: "x".into(),
            name: "Fire // Ice".into(),
            mv: mv(3.0),
            image: "img".into(),
            scryfall_uri: "uri".into(),
            casting_costs: vec![mv(2.0), mv(4.0)],
            mana_costs: vec![],
        };
        assert!(card.matches(mv(3.0), mv(4.0)));
        assert!(!card.matches(mv(3.0), mv(3.0)));
        assert!(!card.matches(mv(2.0), mv(4.0)));
    }

    #[test]
    fn test_selection_sentinel() {
        assert_eq!(parse_selection("-1"), None);
        assert_eq!(parse_selection(""), None);
        assert_eq!(parse_selection("2"), Some(mv(2.0)));

        let partial = Selection::new(Some(mv(1.0)), None);
        assert!(!partial.is_complete());
        let full = Selection::new(Some(mv(1.0)), Some(mv(2.0)));
        assert_eq!(full.both(), Some((mv(1.0), mv(2.0))));
    }
}
