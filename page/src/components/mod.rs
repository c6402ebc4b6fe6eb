//! Leptos UI components for the info page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── PageHeader
//! ├── InfoCard (one per feature, staggered entrance)
//! ├── FeatureSection (commands)
//! ├── FeatureSection (tech stack)
//! └── GettingStarted
//! ```
//!
//! Components are typically used via [`crate::render_page`], but can be
//! composed directly for custom layouts:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use kuro_page::components::{FeatureSection, InfoCard};
//!
//! view! {
//!     <InfoCard icon="🔑" title="Key System" description="..." />
//!     <FeatureSection title="Available Commands" items=&["/start - ..."] />
//! }
//! ```

mod document;
mod feature_section;
mod info_card;

pub use document::PageDocument;
pub use feature_section::FeatureSection;
pub use info_card::InfoCard;
