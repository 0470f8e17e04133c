//! Color constants for the Keepsake palette.
//!
//! Warm paper-and-ribbon aesthetic: cream backgrounds, rose and dusty
//! blue accents.

#![allow(dead_code)]

// === PAPER (Backgrounds) ===
pub const PAPER: &str = "#fff6f2";
pub const PAPER_DEEP: &str = "#ffe9e4";
pub const PAPER_BORDER: &str = "#f3d5cf";

// === ROSE (Hearts, Titles, Primary Accent) ===
pub const ROSE: &str = "#ff3b5c";
pub const ROSE_DEEP: &str = "#e63946";
pub const ROSE_GLOW: &str = "rgba(255, 59, 92, 0.35)";

// === DUSK BLUE (Secondary Accent) ===
pub const DUSK: &str = "#7db8c5";
pub const DUSK_LIGHT: &str = "#a8d8ea";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#3d2b2e";
pub const TEXT_SECONDARY: &str = "rgba(61, 43, 46, 0.7)";
pub const TEXT_ON_ACCENT: &str = "#fffdfd";
