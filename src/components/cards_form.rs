//! Filter form: two dropdowns and, once both are set, the matching cards.

use dioxus::prelude::*;
use splitcards_core::{view_state, Card, ManaValue, Selection, ViewState};

use crate::components::{CardResults, FilterSelect};
use crate::context::use_catalog;

/// Form driving the card filter.
///
/// Shows a loading notice until the catalog is available. The visible
/// cards are recomputed from scratch whenever either selection changes.
#[component]
pub fn CardsForm() -> Element {
    let catalog = use_catalog();
    let mut selected_mv = use_signal(|| Option::<ManaValue>::None);
    let mut selected_cost = use_signal(|| Option::<ManaValue>::None);

    let Some(catalog) = catalog() else {
        return rsx! {
            div { class: "loading", "Loading..." }
        };
    };

    let selection = Selection::new(selected_mv(), selected_cost());
    let results: Option<Vec<Card>> = match view_state(Some(&*catalog), selection) {
        ViewState::ShowingResults(cards) => Some(cards.into_iter().cloned().collect()),
        ViewState::Loading | ViewState::AwaitingSelection => None,
    };

    rsx! {
        form {
            class: "cards-form",
            onsubmit: move |evt: FormEvent| evt.prevent_default(),
            div { class: "cards-form__filters",
                FilterSelect {
                    label: "Base Card Mana Value (MV):",
                    placeholder: "Select MV",
                    values: catalog.mv_values().to_vec(),
                    on_change: move |value: Option<ManaValue>| {
                        tracing::debug!("Mana value selected: {:?}", value);
                        selected_mv.set(value);
                    },
                }
                FilterSelect {
                    label: "Casting Cost:",
                    placeholder: "Select Casting Cost",
                    values: catalog.casting_cost_values().to_vec(),
                    on_change: move |value: Option<ManaValue>| {
                        tracing::debug!("Casting cost selected: {:?}", value);
                        selected_cost.set(value);
                    },
                }
            }
            {results.map(|cards| rsx! { CardResults { cards } })}
        }
    }
}
