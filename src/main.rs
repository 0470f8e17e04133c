#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("keepsake")
    })
}

/// Keepsake - Greeting Card Gallery
#[derive(Parser, Debug)]
#[command(name = "keepsake-desktop")]
#[command(about = "Keepsake - a greeting card gallery you can make your own")]
struct Args {
    /// Data directory for storage (use different dirs for multiple galleries)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Gallery name (creates data dir: keepsake-<name>)
    #[arg(short, long)]
    name: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // Determine data directory and display name
    let (data_dir, display_name) = if let Some(dir) = args.data_dir {
        let name = dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("custom")
            .to_string();
        (dir, name)
    } else if let Some(ref name) = args.name {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(format!("keepsake-{}", name));
        (base, name.clone())
    } else {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("keepsake");
        (base, String::new())
    };

    // Store data directory globally
    let _ = DATA_DIR.set(data_dir.clone());

    // Window title with gallery name
    let title = if !display_name.is_empty() {
        format!("Keepsake - {}", display_name)
    } else {
        "Keepsake".to_string()
    };

    tracing::info!("Starting '{}' with data dir: {:?}", title, data_dir);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
