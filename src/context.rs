//! Gallery context provider for Keepsake.
//!
//! Provides the Gallery instance to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let gallery = use_gallery();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use keepsake_core::Gallery;
use tokio::sync::RwLock;

/// Shared gallery type for context.
///
/// The gallery is wrapped in Arc<RwLock<>> to allow:
/// - Multiple components to read concurrently
/// - Safe mutation when the session changes
pub type SharedGallery = Arc<RwLock<Option<Gallery>>>;

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Hook to access the Gallery from context.
///
/// Returns a Signal containing the shared gallery state.
///
/// # Example
///
/// ```ignore
/// let gallery = use_gallery();
///
/// // Read gallery state
/// if let Some(ref g) = *gallery.read().await {
///     let content = g.content_for(card)?;
/// }
/// ```
pub fn use_gallery() -> Signal<SharedGallery> {
    use_context::<Signal<SharedGallery>>()
}

/// Hook to check if the gallery is initialized.
///
/// Returns a reactive signal that updates when gallery state changes.
pub fn use_gallery_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}
