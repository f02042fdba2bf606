//! Labelled dropdown over a list of mana values.

use dioxus::prelude::*;
use splitcards_core::{parse_selection, ManaValue};

/// Value carried by the placeholder option. Selecting it clears the filter.
pub const PLACEHOLDER_VALUE: &str = "-1";

/// Props for the FilterSelect component.
#[derive(Props, Clone, PartialEq)]
pub struct FilterSelectProps {
    /// Label text shown before the dropdown
    pub label: String,
    /// Text of the leading placeholder option
    pub placeholder: String,
    /// Values to offer, already sorted
    pub values: Vec<ManaValue>,
    /// Called with the new selection; `None` when the placeholder is picked
    pub on_change: EventHandler<Option<ManaValue>>,
}

/// Dropdown whose first option is always the unset placeholder.
///
/// # Example
///
/// ```ignore
/// FilterSelect {
///     label: "Casting Cost:",
///     placeholder: "Select Casting Cost",
///     values: catalog.casting_cost_values().to_vec(),
///     on_change: move |value| selected_cost.set(value),
/// }
/// ```
#[component]
pub fn FilterSelect(props: FilterSelectProps) -> Element {
    let on_change = props.on_change;

    rsx! {
        label { class: "filter-label",
            span { class: "filter-label__text", "{props.label}" }
            select {
                class: "filter-select",
                onchange: move |evt: FormEvent| on_change.call(parse_selection(&evt.value())),
                option { value: PLACEHOLDER_VALUE, "{props.placeholder}" }
                for value in props.values.iter() {
                    option { key: "{value}", value: "{value}", "{value}" }
                }
            }
        }
    }
}
