//! End-to-end gallery flows against a real on-disk store
//!
//! These tests exercise the open/edit/attach/reopen paths the UI drives,
//! including behavior across separate gallery instances (restarts).

use keepsake_core::{catalog, definition, CardError, CardId, Gallery, ModalSession};
use tempfile::TempDir;

const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 0];

fn card(index: u8) -> CardId {
    CardId::new(index).unwrap()
}

// ============================================================================
// Session Lifecycle
// ============================================================================

/// Open, inspect, close - the basic modal round trip
#[test]
fn test_open_and_close_cycle() {
    let temp = TempDir::new().unwrap();
    let mut gallery = Gallery::new(temp.path()).unwrap();

    assert_eq!(gallery.session(), ModalSession::Closed);

    let content = gallery.activate(card(1)).unwrap().unwrap();
    assert_eq!(content.title, definition(card(1)).title);
    assert_eq!(gallery.session(), ModalSession::Open(card(1)));

    assert_eq!(gallery.dismiss(), Some(card(1)));
    assert_eq!(gallery.session(), ModalSession::Closed);
}

/// Only one card can ever be expanded; further activations are ignored
#[test]
fn test_at_most_one_open_card() {
    let temp = TempDir::new().unwrap();
    let mut gallery = Gallery::new(temp.path()).unwrap();

    gallery.activate(card(1)).unwrap();
    for other in CardId::all() {
        assert!(gallery.activate(other).unwrap().is_none());
    }
    assert_eq!(gallery.current_card(), Some(card(1)));
}

/// Dismissing twice is harmless
#[test]
fn test_double_dismiss() {
    let temp = TempDir::new().unwrap();
    let mut gallery = Gallery::new(temp.path()).unwrap();

    gallery.activate(card(2)).unwrap();
    assert_eq!(gallery.dismiss(), Some(card(2)));
    assert_eq!(gallery.dismiss(), None);
}

// ============================================================================
// Edits Across Restarts
// ============================================================================

/// Title and message edits survive a full gallery restart
#[test]
fn test_edits_survive_restart() {
    let temp = TempDir::new().unwrap();

    {
        let gallery = Gallery::new(temp.path()).unwrap();
        gallery.set_title(card(2), "Paper Anniversary").unwrap();
        gallery
            .set_message(card(2), "One year down.\nForever to go.")
            .unwrap();
    }

    let mut reopened = Gallery::new(temp.path()).unwrap();
    let content = reopened.activate(card(2)).unwrap().unwrap();
    assert_eq!(content.title, "Paper Anniversary");
    assert_eq!(content.message, "One year down.\nForever to go.");
}

/// Editing one card never leaks into the others
#[test]
fn test_edit_isolation_across_catalog() {
    let temp = TempDir::new().unwrap();
    let mut gallery = Gallery::new(temp.path()).unwrap();

    gallery.set_title(card(1), "Changed").unwrap();

    for def in catalog().iter().filter(|d| d.id != card(1)) {
        let content = gallery.activate(def.id).unwrap().unwrap();
        assert_eq!(content.title, def.title);
        assert_eq!(content.message, def.message);
        gallery.dismiss();
    }
}

/// Repeated edits overwrite in place; the latest one wins
#[test]
fn test_last_edit_wins() {
    let temp = TempDir::new().unwrap();
    let gallery = Gallery::new(temp.path()).unwrap();

    gallery.set_message(card(4), "first draft").unwrap();
    gallery.set_message(card(4), "second draft").unwrap();
    gallery.set_message(card(4), "final").unwrap();

    assert_eq!(gallery.content_for(card(4)).unwrap().message, "final");
}

// ============================================================================
// Picture Attach
// ============================================================================

/// A valid picture shows immediately and again on a fresh open from storage
#[test]
fn test_picture_round_trip_through_storage() {
    let temp = TempDir::new().unwrap();

    let shown = {
        let mut gallery = Gallery::new(temp.path()).unwrap();
        gallery.activate(card(3)).unwrap();
        let uri = gallery.attach_image(card(3), PNG_HEADER).unwrap();
        gallery.dismiss();
        uri
    };

    let mut reopened = Gallery::new(temp.path()).unwrap();
    let content = reopened.activate(card(3)).unwrap().unwrap();
    assert_eq!(content.image.as_deref(), Some(shown.as_str()));
}

/// Rejected selections change nothing and write nothing
#[test]
fn test_rejected_selection_leaves_state_unchanged() {
    let temp = TempDir::new().unwrap();
    let mut gallery = Gallery::new(temp.path()).unwrap();

    gallery.attach_image(card(1), PNG_HEADER).unwrap();
    let before = gallery.content_for(card(1)).unwrap();

    let result = gallery.attach_image(card(1), b"To Whom It May Concern,");
    assert!(matches!(result, Err(CardError::UnsupportedMedia(_))));

    // Displayed state is exactly what it was
    assert_eq!(gallery.content_for(card(1)).unwrap(), before);

    // And an untouched card still has no picture
    let untouched = gallery.activate(card(2)).unwrap().unwrap();
    assert!(untouched.image.is_none());
}

/// A selection dispatched on one card lands there even if the modal moved on
#[test]
fn test_attach_targets_dispatch_time_card() {
    let temp = TempDir::new().unwrap();
    let mut gallery = Gallery::new(temp.path()).unwrap();

    gallery.activate(card(1)).unwrap();
    let dispatched_on = gallery.current_card().unwrap();

    // Modal switched to another card while the file read was in flight
    gallery.dismiss();
    gallery.activate(card(4)).unwrap();

    gallery.attach_image(dispatched_on, PNG_HEADER).unwrap();

    assert!(gallery.content_for(card(1)).unwrap().image.is_some());
    assert!(gallery.content_for(card(4)).unwrap().image.is_none());
}
