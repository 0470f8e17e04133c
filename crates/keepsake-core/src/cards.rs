//! Core card types for Keepsake
//!
//! The card catalog is compiled in: four greeting cards with default
//! content and an accent gradient. The set never changes at runtime;
//! only per-card overrides in storage do.

use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Number of cards in the catalog
pub const CARD_COUNT: u8 = 4;

/// Identifier for a card in the catalog
///
/// Cards are numbered 1 through [`CARD_COUNT`]. The slug form
/// (`card-1` .. `card-4`) is the prefix of every storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(u8);

impl CardId {
    /// Create a CardId, checking it is within the catalog
    pub fn new(index: u8) -> Result<Self, CardError> {
        if (1..=CARD_COUNT).contains(&index) {
            Ok(Self(index))
        } else {
            Err(CardError::UnknownCard(format!("card-{}", index)))
        }
    }

    /// Get the 1-based catalog index
    pub fn index(&self) -> u8 {
        self.0
    }

    /// Convert to the slug used as storage key prefix
    pub fn slug(&self) -> String {
        format!("card-{}", self.0)
    }

    /// Parse from a slug (`card-1` .. `card-4`)
    pub fn from_slug(s: &str) -> Result<Self, CardError> {
        let index = s
            .strip_prefix("card-")
            .and_then(|n| n.parse::<u8>().ok())
            .ok_or_else(|| CardError::UnknownCard(s.to_string()))?;
        Self::new(index)
    }

    /// Iterate over every card in the catalog
    pub fn all() -> impl Iterator<Item = CardId> {
        (1..=CARD_COUNT).map(CardId)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card-{}", self.0)
    }
}

/// Compiled-in definition of a single card
///
/// The accent is an opaque CSS token handed straight to the presentation
/// layer; nothing in the core interprets it.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDefinition {
    /// Card identifier
    pub id: CardId,
    /// Default title shown until the user edits it
    pub title: &'static str,
    /// Default message shown until the user edits it
    pub message: &'static str,
    /// Accent gradient for the card face and expanded modal
    pub accent: &'static str,
}

/// The static card catalog
const CATALOG: [CardDefinition; CARD_COUNT as usize] = [
    CardDefinition {
        id: CardId(1),
        title: "My Love",
        message: "You fill my heart with joy and happiness every single day. \
                  Thank you for being my Valentine!",
        accent: "linear-gradient(135deg, #FF3B5C 0%, #E63946 100%)",
    },
    CardDefinition {
        id: CardId(2),
        title: "Key to My Heart",
        message: "You unlock the best parts of me and make every moment special. \
                  You are my happiness!",
        accent: "linear-gradient(135deg, #7DB8C5 0%, #88C0D0 100%)",
    },
    CardDefinition {
        id: CardId(3),
        title: "Happy Valentine's Day",
        message: "To the love of my life - thank you for making every day an \
                  adventure filled with love and laughter.",
        accent: "linear-gradient(135deg, #FF3B5C 0%, #DC2F45 100%)",
    },
    CardDefinition {
        id: CardId(4),
        title: "Be Mine",
        message: "Forever and always, you are the one I choose. Will you be my \
                  Valentine today and every day?",
        accent: "linear-gradient(135deg, #B8D4E0 0%, #A8D8EA 100%)",
    },
];

/// Get the full catalog
pub fn catalog() -> &'static [CardDefinition] {
    &CATALOG
}

/// Look up a card definition by id
pub fn definition(id: CardId) -> &'static CardDefinition {
    // CardId construction guarantees the index is in range
    &CATALOG[(id.0 - 1) as usize]
}
