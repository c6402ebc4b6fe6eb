//! Feature tile component

use leptos::prelude::*;

/// One feature tile: icon, title, one-sentence description.
///
/// Each card owns its hover flag. Pointer enter/leave toggle the flag
/// and the emphasis class is a pure function of it, so concurrent hover
/// across distinct cards needs no coordination. The flag lives and dies
/// with the card instance.
#[component]
pub fn InfoCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);

    view! {
        <article
            class=move || if hovered.get() { "info-card is-hovered" } else { "info-card" }
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <div class="info-card-head">
                <span class="info-card-icon">{icon}</span>
                <h3 class="info-card-title">{title}</h3>
            </div>
            <p class="info-card-description">{description}</p>
        </article>
    }
}
