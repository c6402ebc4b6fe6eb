use leptos::prelude::*;

#[component]
pub fn PageHeader() -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-title">"Telegram Bot Management System"</h1>
            <p class="page-tagline">"A comprehensive solution for user and key management"</p>
        </header>
    }
}
