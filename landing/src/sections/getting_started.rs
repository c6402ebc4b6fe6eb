use leptos::prelude::*;

const INSTALL_COMMAND: &str = "pip install mysql-connector-python python-telegram-bot Flask";

#[component]
pub fn GettingStarted() -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let copy_cmd = move |_| {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(INSTALL_COMMAND);
            set_copied.set(true);
            set_timeout(
                move || set_copied.set(false),
                std::time::Duration::from_millis(2000),
            );
        }
    };

    view! {
        <section class="getting-started">
            <h2>"Getting Started"</h2>
            <div class="getting-started-body">
                <h3>"Installation"</h3>
                <p>"Quick setup with pip install for all dependencies."</p>
                <div class="install-snippet">
                    <code>{INSTALL_COMMAND}</code>
                    <button class="copy-btn-small" on:click=copy_cmd>
                        {move || if copied.get() { "OK" } else { "COPY" }}
                    </button>
                </div>
            </div>
        </section>
    }
}
