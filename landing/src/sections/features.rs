use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <div class="feature-grid">
            <div class="card-slot" style="animation-delay: 0ms">
                <InfoCard
                    icon="👤"
                    title="User Management"
                    description="Complete user registration system with account management and admin controls."
                />
            </div>
            <div class="card-slot" style="animation-delay: 150ms">
                <InfoCard
                    icon="🔑"
                    title="Key System"
                    description="Generate and manage keys with customizable duration and device limits."
                />
            </div>
            <div class="card-slot" style="animation-delay: 300ms">
                <InfoCard
                    icon="💰"
                    title="Balance System"
                    description="Integrated balance management with admin controls and automated deductions."
                />
            </div>
            <div class="card-slot" style="animation-delay: 450ms">
                <InfoCard
                    icon="🔄"
                    title="Referral Program"
                    description="Built-in referral system for user growth and rewards."
                />
            </div>
        </div>
    }
}

/// Feature tile with a local hover flag; the emphasis class follows the flag.
#[component]
fn InfoCard(
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
