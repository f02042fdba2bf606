//! Catalog context provider for the Split Cards Finder.
//!
//! The root component loads the catalog once and provides it to every
//! component via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let catalog = use_catalog();
//! if let Some(catalog) = catalog() {
//!     let values = catalog.mv_values();
//! }
//! ```

use std::sync::{Arc, OnceLock};

use dioxus::prelude::*;
use splitcards_core::{Catalog, DataSource, LoadPolicy};

/// Where and how to load the card data, set from command line args.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadConfig {
    pub source: DataSource,
    pub policy: LoadPolicy,
}

static LOAD_CONFIG: OnceLock<LoadConfig> = OnceLock::new();

/// Record the launch configuration. Only the first call has any effect.
pub fn set_load_config(config: LoadConfig) {
    let _ = LOAD_CONFIG.set(config);
}

/// Get the load configuration (set from command line or default).
pub fn get_load_config() -> LoadConfig {
    LOAD_CONFIG.get().cloned().unwrap_or_default()
}

/// Shared catalog type for context.
///
/// `None` until the initial load succeeds. The catalog itself is immutable,
/// so it is shared behind an `Arc` with no lock.
pub type SharedCatalog = Option<Arc<Catalog>>;

/// Hook to access the loaded catalog from context.
pub fn use_catalog() -> Signal<SharedCatalog> {
    use_context::<Signal<SharedCatalog>>()
}
