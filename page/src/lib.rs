//! # kuro-page
//!
//! Leptos SSR renderer for the Kuro Panel informational page.
//!
//! This crate produces the static page that advertises the Kuro Panel
//! Telegram bot management system: four feature tiles, the bot command
//! list, the technology stack, and an install snippet. All copy lives
//! in [`content`] as compile-time literals; rendering is a pure
//! function of those tables.
//!
//! ## Quick Start
//!
//! ```rust
//! let html = kuro_page::render_page();
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! // Write to file
//! // std::fs::write("index.html", html).unwrap();
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - the immutable content tables
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! This library uses Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <PageDocument /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is needed. Each feature tile's
//! hover flag renders in its initial (unhovered) state; the interactive
//! build in `landing/` mounts the same layout client-side.

#![warn(missing_docs)]

pub mod components;
pub mod content;
pub mod styles;

use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the complete info page as an HTML document string.
///
/// This is the only entry point. The output embeds the full stylesheet
/// and starts with `<!DOCTYPE html>`, so the result is a single
/// self-contained file.
pub fn render_page() -> String {
    let doc = view! { <PageDocument /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::content::{COMMANDS, FEATURES, INSTALL_COMMAND, TECH_STACK};

    fn index_of(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("page should contain {needle:?}"))
    }

    #[test]
    fn renders_complete_document() {
        let html = render_page();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("Kuro Panel"));
        assert!(html.contains("Telegram Bot Management System"));
        assert!(html.contains("A comprehensive solution for user and key management"));
        assert_eq!(
            html.matches("<li").count(),
            COMMANDS.len() + TECH_STACK.len()
        );
    }

    #[test]
    fn feature_tiles_in_order_exactly_once() {
        let html = render_page();

        assert_eq!(html.matches("<article").count(), FEATURES.len());
        assert_eq!(html.matches("class=\"card-slot\"").count(), FEATURES.len());

        let mut last = 0;
        for feature in FEATURES {
            assert_eq!(html.matches(feature.icon).count(), 1, "{}", feature.icon);
            assert_eq!(html.matches(feature.title).count(), 1, "{}", feature.title);
            assert_eq!(
                html.matches(feature.description).count(),
                1,
                "{}",
                feature.description
            );

            let at = index_of(&html, feature.title);
            assert!(at > last, "{} out of order", feature.title);
            last = at;
        }
    }

    #[test]
    fn command_list_verbatim_in_order() {
        let html = render_page();

        // Command names carry no markup-significant characters, so they
        // survive text escaping untouched.
        let names = [
            "/start", "/help", "/register", "/myaccount", "/generatekey",
            "/resetdevice", "/addbalance", "/promote", "/setprice", "/generatereferral",
        ];
        assert_eq!(names.len(), COMMANDS.len());

        let mut last = 0;
        for name in names {
            assert_eq!(html.matches(name).count(), 1, "{name}");
            let at = index_of(&html, name);
            assert!(at > last, "{name} out of order");
            last = at;
        }

        assert!(html.contains("Start the bot and display the main menu."));
        assert!(html.contains("Reset the device ID for a key."));
        assert!(html.contains("Generate a referral code (Admin only)."));
    }

    #[test]
    fn tech_stack_verbatim_in_order() {
        let html = render_page();

        let mut last = 0;
        for entry in TECH_STACK {
            assert_eq!(html.matches(entry).count(), 1, "{entry}");
            let at = index_of(&html, entry);
            assert!(at > last, "{entry} out of order");
            last = at;
        }
    }

    #[test]
    fn commands_section_precedes_tech_stack() {
        let html = render_page();

        assert!(index_of(&html, "Available Commands") < index_of(&html, "Technology Stack"));
    }

    #[test]
    fn install_snippet_shown_verbatim_once() {
        let html = render_page();

        assert_eq!(html.matches(INSTALL_COMMAND).count(), 1);
        assert!(index_of(&html, "Getting Started") < index_of(&html, INSTALL_COMMAND));
    }

    #[test]
    fn entrance_delays_follow_tile_order() {
        let html = render_page();

        let mut last = 0;
        for delay in ["animation-delay: 0ms", "animation-delay: 150ms",
                      "animation-delay: 300ms", "animation-delay: 450ms"] {
            assert_eq!(html.matches(delay).count(), 1, "{delay}");
            let at = index_of(&html, delay);
            assert!(at > last);
            last = at;
        }
    }

    #[test]
    fn no_tile_starts_emphasized() {
        let html = render_page();

        // The stylesheet mentions .info-card.is-hovered; no rendered card
        // may carry the emphasis class itself.
        assert_eq!(html.matches("info-card is-hovered").count(), 0);
    }

    #[test]
    fn render_is_deterministic() {
        assert_eq!(render_page(), render_page());
    }
}
