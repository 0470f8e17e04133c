//! Keepsake Core Library
//!
//! Greeting card gallery with persistent per-card overrides.
//!
//! ## Overview
//!
//! Keepsake presents a fixed catalog of greeting cards. Each card can be
//! expanded into a modal, its title and message edited in place, and a
//! picture attached; edits persist across sessions in an on-disk
//! key-value store. Defaults are compiled in, so a card that was never
//! touched always renders its original content.
//!
//! ## Quick Start
//!
//! ```ignore
//! use keepsake_core::{CardId, Gallery};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut gallery = Gallery::new("~/.keepsake/data")?;
//!
//!     // Expand the first card
//!     let card = CardId::new(1)?;
//!     let content = gallery.activate(card)?.expect("nothing was open");
//!     println!("{}", content.title);
//!
//!     // Edit it; the change survives restarts
//!     gallery.set_message(card, "Meet me at the usual place.")?;
//!     gallery.dismiss();
//!
//!     Ok(())
//! }
//! ```

pub mod cards;
pub mod content;
pub mod error;
pub mod gallery;
pub mod picture;
pub mod session;
pub mod storage;

// Re-exports
pub use cards::{catalog, definition, CardDefinition, CardId, CARD_COUNT};
pub use content::{resolve, CardContent, CardOverride};
pub use error::{CardError, CardResult};
pub use gallery::Gallery;
pub use session::ModalSession;
pub use storage::Storage;
