//! Root document component - the complete HTML page

use leptos::prelude::*;

use super::{FeatureSection, InfoCard};
use crate::content::{COMMANDS, FEATURES, INSTALL_COMMAND, PAGE_TAGLINE, PAGE_TITLE, TECH_STACK};
use crate::styles::{CSP, PAGE_CSS};

/// Entrance delay step between consecutive feature tiles.
const CARD_STAGGER_MS: usize = 150;

/// The complete HTML document for the info page
#[component]
pub fn PageDocument() -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>"Kuro Panel — Telegram Bot Management System"</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <main class="page">
                    <div class="container">
                        <PageHeader />

                        <div class="feature-grid">
                            {FEATURES.iter().enumerate().map(|(idx, feature)| {
                                let delay = format!("animation-delay: {}ms", idx * CARD_STAGGER_MS);
                                view! {
                                    <div class="card-slot" style=delay>
                                        <InfoCard
                                            icon=feature.icon
                                            title=feature.title
                                            description=feature.description
                                        />
                                    </div>
                                }
                            }).collect::<Vec<_>>()}
                        </div>

                        <div class="list-grid">
                            <div class="enter-left">
                                <FeatureSection title="Available Commands" items=&COMMANDS />
                            </div>
                            <div class="enter-right">
                                <FeatureSection title="Technology Stack" items=&TECH_STACK />
                            </div>
                        </div>

                        <GettingStarted />
                    </div>
                </main>
            </body>
        </html>
    }
}

/// Page header: gradient product title plus tagline
#[component]
fn PageHeader() -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-title">{PAGE_TITLE}</h1>
            <p class="page-tagline">{PAGE_TAGLINE}</p>
        </header>
    }
}

/// Static closing block with the install one-liner
#[component]
fn GettingStarted() -> impl IntoView {
    view! {
        <section class="getting-started">
            <h2>"Getting Started"</h2>
            <div class="getting-started-body">
                <h3>"Installation"</h3>
                <p>"Quick setup with pip install for all dependencies."</p>
                <div class="install-snippet">
                    <code>{INSTALL_COMMAND}</code>
                </div>
            </div>
        </section>
    }
}
