//! Card Grid Component
//!
//! The always-visible grid of four card tiles. Tiles activate on click or
//! keyboard (Enter/Space) and take focus back when the modal they opened
//! is dismissed.

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use keepsake_core::CardId;

/// Press animation length before the modal opens
const PRESS: Duration = Duration::from_millis(150);
/// Delay before a tile reclaims focus, matching the close transition
const REFOCUS_DELAY: Duration = Duration::from_millis(400);

/// Grid of card tiles built from the static catalog.
#[component]
pub fn CardGrid(
    /// Activation handler (receives the tile's card id)
    on_activate: EventHandler<CardId>,
    /// Card that should reclaim focus after a dismiss
    refocus: Signal<Option<CardId>>,
) -> Element {
    rsx! {
        div { class: "card-grid",
            for def in keepsake_core::catalog() {
                CardTile {
                    key: "{def.id}",
                    id: def.id,
                    title: def.title.to_string(),
                    accent: def.accent.to_string(),
                    refocus,
                    on_activate: move |id| on_activate.call(id),
                }
            }
        }
    }
}

/// A single card tile.
#[component]
fn CardTile(
    id: CardId,
    title: String,
    accent: String,
    refocus: Signal<Option<CardId>>,
    on_activate: EventHandler<CardId>,
) -> Element {
    let mut pressed = use_signal(|| false);
    let mut mounted: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    // Take focus back once the modal opened from this tile closes
    use_effect(move || {
        if refocus() == Some(id) {
            let mut refocus = refocus;
            spawn(async move {
                tokio::time::sleep(REFOCUS_DELAY).await;
                if let Some(handle) = mounted() {
                    let _ = handle.set_focus(true).await;
                }
                refocus.set(None);
            });
        }
    });

    // Brief press animation, then hand off to the activation handler
    let press_then_open = move || {
        spawn(async move {
            pressed.set(true);
            tokio::time::sleep(PRESS).await;
            pressed.set(false);
            on_activate.call(id);
        });
    };

    rsx! {
        div {
            class: if pressed() { "card-tile pressed" } else { "card-tile" },
            style: "background: {accent};",
            role: "button",
            tabindex: "0",
            onmounted: move |evt| mounted.set(Some(evt.data())),
            onclick: move |_| press_then_open(),
            onkeydown: move |e| {
                if e.key() == Key::Enter || e.key() == Key::Character(" ".to_string()) {
                    e.prevent_default();
                    press_then_open();
                }
            },

            div { class: "card-tile__heart", "\u{2764}" }
            div { class: "card-tile__label", "{title}" }
        }
    }
}
