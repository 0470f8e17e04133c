//! Loading Screen Component
//!
//! Full-window overlay shown once on startup: visible for 2.5s, fades out
//! over 0.6s, then leaves the tree for good.

use dioxus::prelude::*;
use std::time::Duration;

/// Hold time before the fade begins
const HOLD: Duration = Duration::from_millis(2500);
/// Fade duration, matching the CSS transition
const FADE: Duration = Duration::from_millis(600);

#[derive(Clone, Copy, PartialEq)]
enum Phase {
    Showing,
    Fading,
    Done,
}

/// Startup overlay with a pulsing heart.
///
/// Purely time-driven; there is no cancellation path and none is needed,
/// the whole sequence outlives nothing.
#[component]
pub fn LoadingScreen() -> Element {
    let mut phase = use_signal(|| Phase::Showing);

    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(HOLD).await;
            phase.set(Phase::Fading);
            tokio::time::sleep(FADE).await;
            phase.set(Phase::Done);
        });
    });

    if phase() == Phase::Done {
        return rsx! {};
    }

    rsx! {
        div {
            class: if phase() == Phase::Fading { "loader-overlay fading" } else { "loader-overlay" },

            div { class: "loader-heart", "\u{2764}" }
            p { class: "loader-text", "Keepsake" }
        }
    }
}
