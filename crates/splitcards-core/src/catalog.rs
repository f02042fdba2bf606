//! The loaded card catalog.
//!
//! A [`Catalog`] bundles the card list with the option lists derived from
//! it. It is built once per launch and never mutated afterwards.

use crate::error::{CatalogError, CatalogResult};
use crate::filter::FilterOptions;
use crate::loader::{parse_card_lines, LoadPolicy, RejectedLine};
use crate::source::DataSource;
use crate::types::{Card, ManaValue};

/// Immutable card list plus dropdown options.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    cards: Vec<Card>,
    options: FilterOptions,
    rejected: Vec<RejectedLine>,
}

impl Catalog {
    /// Build a catalog from decoded cards.
    ///
    /// Fails with [`CatalogError::Empty`] when there is nothing to choose
    /// from in either dropdown.
    pub fn from_cards(cards: Vec<Card>, rejected: Vec<RejectedLine>) -> CatalogResult<Self> {
        let options = FilterOptions::from_cards(&cards);
        if cards.is_empty() || options.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self {
            cards,
            options,
            rejected,
        })
    }

    /// Decode newline-delimited card text.
    pub fn parse(text: &str, policy: LoadPolicy) -> CatalogResult<Self> {
        let parsed = parse_card_lines(text, policy)?;
        Self::from_cards(parsed.cards, parsed.rejected)
    }

    /// Fetch and decode the data source.
    pub async fn load(source: &DataSource, policy: LoadPolicy) -> CatalogResult<Self> {
        let text = source.fetch_text().await?;
        let catalog = Self::parse(&text, policy)?;
        tracing::info!(
            "Loaded {} cards from {} ({} mana values, {} casting costs, {} rejected lines)",
            catalog.cards.len(),
            source,
            catalog.options.mv_values.len(),
            catalog.options.casting_cost_values.len(),
            catalog.rejected.len()
        );
        Ok(catalog)
    }

    /// All cards in file order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Distinct mana values, ascending.
    pub fn mv_values(&self) -> &[ManaValue] {
        &self.options.mv_values
    }

    /// Distinct casting costs across all cards, ascending.
    pub fn casting_cost_values(&self) -> &[ManaValue] {
        &self.options.casting_cost_values
    }

    /// Lines skipped while loading (lenient policy only).
    pub fn rejected(&self) -> &[RejectedLine] {
        &self.rejected
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOLT: &str = r#"{"oracle_id":"a1","name":"Bolt","mv":1,"image":"i1","scryfall_uri":"u1","casting_costs":[1],"mana_costs":["R"]}"#;

    #[test]
    fn test_single_card_catalog() {
        let text = format!("{}\n", BOLT);
        let catalog = Catalog::parse(&text, LoadPolicy::Strict).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.mv_values(), &[ManaValue::from(1)]);
        assert_eq!(catalog.casting_cost_values(), &[ManaValue::from(1)]);
        assert!(catalog.rejected().is_empty());
    }

    #[test]
    fn test_empty_text_is_empty_catalog() {
        assert!(matches!(
            Catalog::parse("\n\n", LoadPolicy::Lenient),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_no_casting_costs_is_empty_catalog() {
        let text = r#"{"oracle_id":"a","name":"A","mv":1,"image":"i","scryfall_uri":"u","casting_costs":[]}"#;
        assert!(matches!(
            Catalog::parse(text, LoadPolicy::Strict),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_lenient_catalog_keeps_rejected() {
        let text = format!("garbage\n{}\n", BOLT);
        let catalog = Catalog::parse(&text, LoadPolicy::Lenient).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.rejected()[0].line_number, 1);
    }
}
