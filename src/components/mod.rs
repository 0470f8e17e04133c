//! UI Components for Keepsake.

mod card_grid;
mod card_modal;
mod gallery_view;
mod loading_screen;

pub use card_grid::CardGrid;
pub use card_modal::{ActiveCard, CardModal};
pub use gallery_view::GalleryView;
pub use loading_screen::LoadingScreen;
