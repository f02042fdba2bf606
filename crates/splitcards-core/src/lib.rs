//! Split Cards Core Library
//!
//! Loads the pre-generated split cards data file and answers the one
//! question the finder asks: which cards have this mana value and can be
//! cast for this cost?
//!
//! ## Overview
//!
//! The data file is newline-delimited JSON, one card per line. Loading it
//! produces a [`Catalog`]: the cards plus the sorted, distinct values for
//! the two filter dropdowns. Filtering is a pure function over the catalog.
//!
//! ## Quick Start
//!
//! ```ignore
//! use splitcards_core::{compute_visible_cards, Catalog, DataSource, LoadPolicy, ManaValue};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source: DataSource = "split_cards.json".parse()?;
//!     let catalog = Catalog::load(&source, LoadPolicy::Lenient).await?;
//!
//!     let visible = compute_visible_cards(
//!         catalog.cards(),
//!         Some(ManaValue::from(3)),
//!         Some(ManaValue::from(2)),
//!     );
//!     for card in visible {
//!         println!("{} {}", card.name, card.scryfall_uri);
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod filter;
pub mod loader;
pub mod source;
pub mod types;

// Re-exports
pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use filter::{compute_visible_cards, view_state, FilterOptions, ViewState};
pub use loader::{parse_card_lines, LoadPolicy, ParsedLines, RejectReason, RejectedLine};
pub use source::{DataSource, DEFAULT_DATA_FILE};
pub use types::*;
