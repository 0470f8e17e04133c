//! Card Modal Component
//!
//! The expanded view of a single card: accent surface, editable title and
//! message, and a picture region that opens the platform file picker.
//! Dismissed by the close button, a click outside the surface, or Escape.

use std::time::Duration;

use dioxus::prelude::*;
use keepsake_core::{CardContent, CardError, CardId};
use rfd::FileDialog;

use crate::context::use_gallery;

/// Delay before the close button takes focus
const FOCUS_DELAY: Duration = Duration::from_millis(100);

/// The card currently expanded, with its resolved content.
#[derive(Clone, PartialEq)]
pub struct ActiveCard {
    pub id: CardId,
    pub content: CardContent,
}

#[derive(Clone, Copy, PartialEq)]
enum EditField {
    Title,
    Message,
}

/// Expanded-card modal.
///
/// # Example
///
/// ```ignore
/// rsx! {
///     if let Some(card) = active() {
///         CardModal {
///             active: card,
///             on_dismiss: move |_| { /* close the session */ },
///         }
///     }
/// }
/// ```
#[component]
pub fn CardModal(
    /// The open card and its content
    active: ActiveCard,
    /// Callback when the modal is dismissed
    on_dismiss: EventHandler<()>,
) -> Element {
    let gallery = use_gallery();
    let id = active.id;

    // Displayed content; refreshed from the gallery after edits and attaches
    let mut content = use_signal(|| active.content.clone());
    let mut editing: Signal<Option<EditField>> = use_signal(|| None);
    let mut edit_value = use_signal(String::new);
    let mut picking = use_signal(|| false);

    // Persist the open editor's text, then re-resolve so empty edits
    // fall back to the card's default
    let commit_edit = move |field: EditField| {
        let text = edit_value();
        spawn(async move {
            let shared = gallery();
            let guard = shared.read().await;
            if let Some(ref g) = *guard {
                let saved = match field {
                    EditField::Title => g.set_title(id, &text),
                    EditField::Message => g.set_message(id, &text),
                };
                if let Err(e) = saved {
                    tracing::error!("Could not save edit for {}: {}", id, e);
                }
                match g.content_for(id) {
                    Ok(c) => content.set(c),
                    Err(e) => tracing::error!("Could not reload {}: {}", id, e),
                }
            }
            editing.set(None);
        });
    };

    // Open the picker and attach the chosen picture. The card id is
    // captured here, at dispatch, so a selection started on this card can
    // never land on another one however long the read takes.
    let pick_picture = move |_| {
        if picking() {
            return;
        }
        picking.set(true);
        let captured = id;

        spawn(async move {
            // Open file picker (blocking, but in spawn_blocking so UI stays responsive)
            let file = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "webp"])
                    .set_title("Choose a picture")
                    .pick_file()
            })
            .await;

            match file {
                Ok(Some(path)) => match tokio::fs::read(&path).await {
                    Ok(bytes) => {
                        let shared = gallery();
                        let guard = shared.read().await;
                        if let Some(ref g) = *guard {
                            match g.attach_image(captured, &bytes) {
                                Ok(uri) => {
                                    // Refresh the view only if this card is still open
                                    if g.current_card() == Some(captured) {
                                        content.with_mut(|c| c.image = Some(uri));
                                    }
                                }
                                Err(CardError::UnsupportedMedia(reason)) => {
                                    tracing::debug!("Ignoring non-image selection: {}", reason);
                                }
                                Err(e) => tracing::warn!("Could not attach picture: {}", e),
                            }
                        }
                    }
                    Err(e) => tracing::warn!("Could not read {:?}: {}", path, e),
                },
                // User cancelled
                Ok(None) => {}
                Err(e) => tracing::warn!("File picker error: {}", e),
            }
            picking.set(false);
        });
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_dismiss.call(()),
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    on_dismiss.call(());
                }
            },

            div {
                class: "expanded-card",
                style: "background: {content().accent};",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "modal-close-btn",
                    onmounted: move |evt| {
                        spawn(async move {
                            tokio::time::sleep(FOCUS_DELAY).await;
                            let _ = evt.data().set_focus(true).await;
                        });
                    },
                    onclick: move |_| on_dismiss.call(()),
                    "\u{00d7}"
                }

                // Picture region: click to choose, placeholder until then
                div {
                    class: "content-image-container",
                    title: "Click to add a picture",
                    onclick: pick_picture,

                    if let Some(uri) = content().image {
                        img {
                            class: "modal-image",
                            src: "{uri}",
                            alt: "Card picture",
                        }
                    } else {
                        div { class: "image-placeholder",
                            span { class: "image-placeholder__icon", "\u{1f4f7}" }
                            span { class: "image-placeholder__hint",
                                if picking() { "Choosing..." } else { "Add a picture" }
                            }
                        }
                    }
                }

                // Title (click to edit; Enter commits instead of breaking the line)
                if editing() == Some(EditField::Title) {
                    input {
                        class: "modal-title-input",
                        r#type: "text",
                        value: "{edit_value()}",
                        autofocus: true,
                        oninput: move |e| edit_value.set(e.value()),
                        onblur: move |_| commit_edit(EditField::Title),
                        onkeydown: move |e| {
                            if e.key() == Key::Enter {
                                e.prevent_default();
                                commit_edit(EditField::Title);
                            } else if e.key() == Key::Escape {
                                e.stop_propagation();
                                editing.set(None);
                            }
                        },
                    }
                } else {
                    h2 {
                        class: "modal-title editable",
                        title: "Click to edit",
                        onclick: move |_| {
                            edit_value.set(content().title.clone());
                            editing.set(Some(EditField::Title));
                        },
                        "{content().title}"
                    }
                }

                // Message (click to edit; multi-line, Enter breaks the line)
                if editing() == Some(EditField::Message) {
                    textarea {
                        class: "modal-message-input",
                        value: "{edit_value()}",
                        rows: "5",
                        autofocus: true,
                        oninput: move |e| edit_value.set(e.value()),
                        onblur: move |_| commit_edit(EditField::Message),
                        onkeydown: move |e| {
                            if e.key() == Key::Escape {
                                e.stop_propagation();
                                editing.set(None);
                            }
                        },
                    }
                } else {
                    p {
                        class: "modal-message editable",
                        title: "Click to edit",
                        onclick: move |_| {
                            edit_value.set(content().message.clone());
                            editing.set(Some(EditField::Message));
                        },
                        "{content().message}"
                    }
                }
            }
        }
    }
}
