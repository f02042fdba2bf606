use std::sync::Arc;

use dioxus::prelude::*;
use splitcards_core::Catalog;

use crate::components::CardsForm;
use crate::context::{get_load_config, SharedCatalog};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the catalog context, and starts the one-time
/// data load.
#[component]
pub fn App() -> Element {
    let mut catalog: Signal<SharedCatalog> = use_signal(|| None);

    use_context_provider(|| catalog);

    // Load the catalog on mount. Failures are logged and the form stays on
    // its loading notice.
    use_effect(move || {
        spawn(async move {
            let config = get_load_config();
            match Catalog::load(&config.source, config.policy).await {
                Ok(loaded) => {
                    catalog.set(Some(Arc::new(loaded)));
                }
                Err(e) => {
                    tracing::error!("Failed to load cards from {}: {}", config.source, e);
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "finder",
            header { class: "finder-header",
                h1 { class: "page-title", "Split Cards Finder" }
            }
            CardsForm {}
        }
    }
}
