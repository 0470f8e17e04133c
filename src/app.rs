use std::sync::Arc;

use dioxus::prelude::*;
use tokio::sync::RwLock;

use crate::components::{GalleryView, LoadingScreen};
use crate::context::{get_data_dir, SharedGallery};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the gallery context, then renders the
/// loading screen over the card grid.
#[component]
pub fn App() -> Element {
    // Initialize shared gallery state
    let gallery: Signal<SharedGallery> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut gallery_ready: Signal<bool> = use_signal(|| false);

    // Provide gallery context to all child components
    use_context_provider(|| gallery);
    use_context_provider(|| gallery_ready);

    // Initialize gallery on mount
    use_effect(move || {
        spawn(async move {
            let data_dir = get_data_dir();
            match keepsake_core::Gallery::new(&data_dir) {
                Ok(g) => {
                    let shared = gallery();
                    let mut guard = shared.write().await;
                    *guard = Some(g);
                    drop(guard);
                    gallery_ready.set(true);
                    tracing::info!("Gallery initialized");
                }
                Err(e) => {
                    tracing::error!("Failed to initialize gallery: {}", e);
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        LoadingScreen {}
        GalleryView {}
    }
}
