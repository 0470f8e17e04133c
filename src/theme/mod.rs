//! Theme for Keepsake.

pub mod colors;
pub mod styles;

pub use styles::GLOBAL_STYLES;
