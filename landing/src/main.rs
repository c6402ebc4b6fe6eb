// Kuro Panel info page - Leptos 0.8 CSR build

mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <main class="page">
            <div class="container">
                <PageHeader />
                <Features />
                <CommandLists />
                <GettingStarted />
            </div>
        </main>
    }
}
