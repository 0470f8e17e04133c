//! Gallery View
//!
//! Wires the card grid to the modal: owns the "which card is expanded"
//! UI state and routes activate/dismiss through the core gallery so the
//! session can only change the ways the state machine allows.

use dioxus::prelude::*;
use keepsake_core::CardId;

use crate::components::{ActiveCard, CardGrid, CardModal};
use crate::context::{use_gallery, use_gallery_ready};

/// Main page: header, card grid, and the expanded-card modal.
#[component]
pub fn GalleryView() -> Element {
    let gallery = use_gallery();
    let gallery_ready = use_gallery_ready();

    // The expanded card, mirrored from the core session for rendering
    let mut active: Signal<Option<ActiveCard>> = use_signal(|| None);
    // Card waiting to get focus back after a dismiss
    let refocus: Signal<Option<CardId>> = use_signal(|| None);

    let on_activate = move |id: CardId| {
        spawn(async move {
            let shared = gallery();
            let mut guard = shared.write().await;
            if let Some(ref mut g) = *guard {
                match g.activate(id) {
                    Ok(Some(content)) => active.set(Some(ActiveCard { id, content })),
                    // A card is already open; nothing to do
                    Ok(None) => {}
                    Err(e) => tracing::error!("Failed to open {}: {}", id, e),
                }
            }
        });
    };

    let on_dismiss = move |_| {
        let mut refocus = refocus;
        spawn(async move {
            let shared = gallery();
            let mut guard = shared.write().await;
            if let Some(ref mut g) = *guard {
                if let Some(returned) = g.dismiss() {
                    refocus.set(Some(returned));
                }
            }
            drop(guard);
            active.set(None);
        });
    };

    rsx! {
        main {
            // Scroll is parked while a card is expanded
            class: if active().is_some() { "gallery-page modal-open" } else { "gallery-page" },

            header { class: "gallery-header",
                h1 { class: "page-title", "Keepsake" }
                p { class: "tagline", "four little cards, yours to keep" }
            }

            if gallery_ready() {
                CardGrid { on_activate, refocus }
            } else {
                div { class: "gallery-waiting",
                    p { class: "body-text", "Opening your keepsakes..." }
                }
            }

            if let Some(card) = active() {
                CardModal { active: card, on_dismiss }
            }
        }
    }
}
