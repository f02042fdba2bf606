//! Filter option derivation and the visible-card computation.

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::types::{Card, ManaValue, Selection};

/// Distinct values offered by the two dropdowns, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub mv_values: Vec<ManaValue>,
    pub casting_cost_values: Vec<ManaValue>,
}

impl FilterOptions {
    /// Collect the distinct mana values and the distinct values of every
    /// card's casting costs.
    pub fn from_cards(cards: &[Card]) -> Self {
        let mv_values: BTreeSet<ManaValue> = cards.iter().map(|card| card.mv).collect();
        let casting_cost_values: BTreeSet<ManaValue> = cards
            .iter()
            .flat_map(|card| card.casting_costs.iter().copied())
            .collect();

        Self {
            mv_values: mv_values.into_iter().collect(),
            casting_cost_values: casting_cost_values.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mv_values.is_empty() || self.casting_cost_values.is_empty()
    }
}

/// Cards matching both selections, in catalog order.
///
/// Returns an empty list without scanning when either selection is unset.
pub fn compute_visible_cards(
    cards: &[Card],
    selected_mv: Option<ManaValue>,
    selected_casting_cost: Option<ManaValue>,
) -> Vec<&Card> {
    let (Some(mv), Some(cost)) = (selected_mv, selected_casting_cost) else {
        return Vec::new();
    };
    cards.iter().filter(|card| card.matches(mv, cost)).collect()
}

/// What the form should show.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<'a> {
    /// No catalog yet
    Loading,
    /// Catalog loaded, at least one dropdown unset
    AwaitingSelection,
    /// Both dropdowns set; the list may be empty
    ShowingResults(Vec<&'a Card>),
}

/// Derive the view state from the (possibly missing) catalog and the
/// current selection.
pub fn view_state<'a>(catalog: Option<&'a Catalog>, selection: Selection) -> ViewState<'a> {
    let Some(catalog) = catalog else {
        return ViewState::Loading;
    };
    if !selection.is_complete() {
        return ViewState::AwaitingSelection;
    }
    ViewState::ShowingResults(compute_visible_cards(
        catalog.cards(),
        selection.mv,
        selection.casting_cost,
    ))
}
