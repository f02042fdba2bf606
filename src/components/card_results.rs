//! Matching cards list.
//!
//! Renders the filtered subset as links to each card's detail page, or a
//! fixed notice when nothing matches.

use dioxus::prelude::*;
use splitcards_core::Card;

/// Shown when both filters are set but no card matches.
pub const NO_MATCHES_MESSAGE: &str = "No matching cards found";

/// Heading above a non-empty result list.
pub const RESULTS_HEADING: &str = "Matching Cards";

/// Result list for a complete selection.
#[component]
pub fn CardResults(
    /// Cards matching the current selection, in catalog order
    cards: Vec<Card>,
) -> Element {
    if cards.is_empty() {
        return rsx! {
            div { class: "no-results", "{NO_MATCHES_MESSAGE}" }
        };
    }

    rsx! {
        section { class: "results",
            h2 { class: "section-header", "{RESULTS_HEADING}" }
            ul { class: "card-list",
                for card in cards.iter() {
                    CardEntry { key: "{card.oracle_id}", card: card.clone() }
                }
            }
        }
    }
}

/// One linked card: name plus image.
#[component]
fn CardEntry(card: Card) -> Element {
    rsx! {
        li { class: "card",
            a { class: "card__link", href: "{card.scryfall_uri}",
                span { class: "card__name", "{card.name}" }
                img { class: "card__image", src: "{card.image}", alt: "{card.name}" }
            }
        }
    }
}
