//! Main Gallery controller - the primary entry point for Keepsake
//!
//! Gallery coordinates the card catalog, the modal session, and Storage:
//! - Activating and dismissing the expanded card modal
//! - Resolving effective content (defaults merged with saved edits)
//! - Persisting title/message edits and attached pictures
//!
//! # Example
//!
//! ```ignore
//! use keepsake_core::{CardId, Gallery};
//!
//! let mut gallery = Gallery::new("~/.keepsake/data")?;
//!
//! // Expand a card
//! let card = CardId::new(1)?;
//! let content = gallery.activate(card)?.expect("nothing was open");
//! println!("{}: {}", content.title, content.message);
//!
//! // Edit and close
//! gallery.set_title(card, "Dearest")?;
//! gallery.dismiss();
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::cards::{self, CardDefinition, CardId};
use crate::content::{self, CardContent};
use crate::error::CardResult;
use crate::picture;
use crate::session::ModalSession;
use crate::storage::Storage;

/// Database file name inside the data directory
const DB_FILE: &str = "keepsake.redb";

/// Main entry point for Keepsake
///
/// Gallery owns the modal session and the storage handle. All UI events
/// funnel through its operations, so the session can only change in the
/// ways the state machine allows.
pub struct Gallery {
    /// Persistent storage for per-card overrides
    storage: Storage,
    /// Which card is currently expanded, if any
    session: ModalSession,
    /// Data directory path
    data_dir: PathBuf,
}

impl Gallery {
    /// Create a new Gallery with the given data directory
    ///
    /// This will:
    /// - Create the data directory if it doesn't exist
    /// - Open (or initialize) the override database inside it
    pub fn new(data_dir: impl AsRef<Path>) -> CardResult<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        let storage = Storage::new(data_dir.join(DB_FILE))?;

        info!("Gallery opened with data dir: {:?}", data_dir);

        Ok(Self {
            storage,
            session: ModalSession::Closed,
            data_dir,
        })
    }

    /// The static card catalog
    pub fn cards(&self) -> &'static [CardDefinition] {
        cards::catalog()
    }

    /// Current modal session state
    pub fn session(&self) -> ModalSession {
        self.session
    }

    /// The card currently expanded, if any
    pub fn current_card(&self) -> Option<CardId> {
        self.session.current()
    }

    /// Data directory this gallery persists into
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolve the effective content of a card without touching the session
    ///
    /// Defaults merged with whatever the user has saved; all fields are
    /// produced together, so callers never see a partial update.
    pub fn content_for(&self, id: CardId) -> CardResult<CardContent> {
        let saved = self.storage.load_override(id)?;
        Ok(content::resolve(cards::definition(id), &saved))
    }

    /// Expand a card into the modal
    ///
    /// Returns the resolved content to display, or `Ok(None)` if a card is
    /// already open (the activation is ignored; tiles are covered by the
    /// overlay, so this only happens for synthetic or racing events).
    pub fn activate(&mut self, id: CardId) -> CardResult<Option<CardContent>> {
        if self.session.activate(id).is_none() {
            debug!("Ignoring activation of {} while {:?} is open", id, self.session);
            return Ok(None);
        }

        let content = self.content_for(id)?;
        info!("Opened {}", id);
        Ok(Some(content))
    }

    /// Close the modal
    ///
    /// Returns the card that was open so the UI can hand focus back to its
    /// tile; `None` if nothing was open.
    pub fn dismiss(&mut self) -> Option<CardId> {
        let closed = self.session.dismiss();
        if let Some(id) = closed {
            info!("Closed {}", id);
        }
        closed
    }

    /// Persist an edited title for a card
    pub fn set_title(&self, id: CardId, title: &str) -> CardResult<()> {
        debug!("Saving title for {}", id);
        self.storage.save_title(id, title)
    }

    /// Persist an edited message for a card
    pub fn set_message(&self, id: CardId, message: &str) -> CardResult<()> {
        debug!("Saving message for {}", id);
        self.storage.save_message(id, message)
    }

    /// Attach a picture to a card
    ///
    /// Validates the bytes sniff as an image, encodes them as a data URI,
    /// and persists the URI under the card chosen when the picker was
    /// opened - `id` is that captured card, never "whatever is open now",
    /// so a selection started on one card cannot land on another.
    ///
    /// Returns the data URI for immediate display. Non-image bytes fail
    /// with [`crate::CardError::UnsupportedMedia`] and write nothing.
    pub fn attach_image(&self, id: CardId, bytes: &[u8]) -> CardResult<String> {
        let data_uri = picture::to_data_uri(bytes)?;
        self.storage.save_image(id, &data_uri)?;
        info!("Attached {} byte picture to {}", bytes.len(), id);
        Ok(data_uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CardError;
    use tempfile::TempDir;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 0];

    fn create_test_gallery() -> (Gallery, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let gallery = Gallery::new(temp_dir.path()).unwrap();
        (gallery, temp_dir)
    }

    fn card(index: u8) -> CardId {
        CardId::new(index).unwrap()
    }

    #[test]
    fn test_activate_shows_defaults_for_untouched_card() {
        let (mut gallery, _temp) = create_test_gallery();

        let content = gallery.activate(card(1)).unwrap().unwrap();
        let def = cards::definition(card(1));
        assert_eq!(content.title, def.title);
        assert_eq!(content.message, def.message);
        assert!(content.image.is_none());
    }

    #[test]
    fn test_override_precedence_and_isolation() {
        let (mut gallery, _temp) = create_test_gallery();

        gallery.set_title(card(2), "Edited title").unwrap();

        let edited = gallery.activate(card(2)).unwrap().unwrap();
        assert_eq!(edited.title, "Edited title");
        gallery.dismiss();

        // Other cards keep their defaults
        let untouched = gallery.activate(card(3)).unwrap().unwrap();
        assert_eq!(untouched.title, cards::definition(card(3)).title);
    }

    #[test]
    fn test_single_active_session() {
        let (mut gallery, _temp) = create_test_gallery();

        gallery.activate(card(1)).unwrap();
        // Second activation is ignored, state unchanged
        assert!(gallery.activate(card(2)).unwrap().is_none());
        assert_eq!(gallery.current_card(), Some(card(1)));
    }

    #[test]
    fn test_dismiss_returns_originating_card() {
        let (mut gallery, _temp) = create_test_gallery();

        gallery.activate(card(4)).unwrap();
        assert_eq!(gallery.dismiss(), Some(card(4)));
        assert_eq!(gallery.current_card(), None);

        // And the gallery is usable again
        assert!(gallery.activate(card(1)).unwrap().is_some());
    }

    #[test]
    fn test_attach_image_displays_and_persists() {
        let temp_dir = TempDir::new().unwrap();

        let uri = {
            let mut gallery = Gallery::new(temp_dir.path()).unwrap();
            gallery.activate(card(2)).unwrap();
            gallery.attach_image(card(2), PNG_HEADER).unwrap()
        };
        assert!(uri.starts_with("data:image/png;base64,"));

        // A fresh session sources the same picture from storage
        let mut reopened = Gallery::new(temp_dir.path()).unwrap();
        let content = reopened.activate(card(2)).unwrap().unwrap();
        assert_eq!(content.image.as_deref(), Some(uri.as_str()));
    }

    #[test]
    fn test_attach_rejects_non_image_without_writing() {
        let (mut gallery, _temp) = create_test_gallery();

        let result = gallery.attach_image(card(1), b"text/plain payload");
        assert!(matches!(result, Err(CardError::UnsupportedMedia(_))));

        // Nothing was written; the placeholder state is unchanged
        let content = gallery.activate(card(1)).unwrap().unwrap();
        assert!(content.image.is_none());
    }

    #[test]
    fn test_attach_keyed_by_captured_card() {
        let (mut gallery, _temp) = create_test_gallery();

        // Picker dispatched while card 1 is open...
        gallery.activate(card(1)).unwrap();
        let captured = gallery.current_card().unwrap();

        // ...but the modal is switched before the read completes
        gallery.dismiss();
        gallery.activate(card(2)).unwrap();

        gallery.attach_image(captured, PNG_HEADER).unwrap();

        // The picture landed on the card the selection started on
        assert!(gallery.content_for(card(1)).unwrap().image.is_some());
        assert!(gallery.content_for(card(2)).unwrap().image.is_none());
    }

    #[test]
    fn test_empty_title_edit_falls_back_to_default() {
        let (mut gallery, _temp) = create_test_gallery();

        gallery.set_title(card(3), "").unwrap();

        let content = gallery.activate(card(3)).unwrap().unwrap();
        assert_eq!(content.title, cards::definition(card(3)).title);
    }
}
