//! UI Components for the Split Cards Finder.

mod card_results;
mod cards_form;
mod filter_select;

pub use card_results::CardResults;
pub use cards_form::CardsForm;
pub use filter_select::FilterSelect;
