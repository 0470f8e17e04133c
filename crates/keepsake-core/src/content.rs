//! Content resolution for cards
//!
//! Merges a card's compiled-in defaults with whatever the user has saved.
//! Resolution is a pure function of its two inputs so the modal never
//! observes a half-applied state.

use serde::{Deserialize, Serialize};

use crate::cards::CardDefinition;

/// User-saved overrides for a single card
///
/// Absent fields mean "use the default". Fields are stored under
/// independent keys, so any subset may be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardOverride {
    /// Replacement title, if the user edited it
    pub title: Option<String>,
    /// Replacement message, if the user edited it
    pub message: Option<String>,
    /// Attached picture as a data URI, if the user chose one
    pub image: Option<String>,
}

impl CardOverride {
    /// True if no field is overridden
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.message.is_none() && self.image.is_none()
    }
}

/// Effective content of a card, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct CardContent {
    /// Title to display
    pub title: String,
    /// Message to display
    pub message: String,
    /// Accent gradient (always the compiled-in one)
    pub accent: &'static str,
    /// Picture data URI; `None` shows the placeholder graphic
    pub image: Option<String>,
}

/// Resolve the effective content of a card
///
/// An override wins only when present and non-empty; the accent is never
/// overridden.
pub fn resolve(def: &CardDefinition, saved: &CardOverride) -> CardContent {
    CardContent {
        title: pick(saved.title.as_deref(), def.title),
        message: pick(saved.message.as_deref(), def.message),
        accent: def.accent,
        image: saved.image.clone().filter(|uri| !uri.is_empty()),
    }
}

fn pick(saved: Option<&str>, default: &str) -> String {
    match saved {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => default.to_string(),
    }
}
