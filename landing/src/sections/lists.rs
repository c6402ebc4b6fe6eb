use leptos::prelude::*;

/// Bot commands shown on the page, in display order.
const COMMANDS: [&str; 10] = [
    "/start - Start the bot and display the main menu.",
    "/help - Display the list of available commands.",
    "/register <password> - Register a new account.",
    "/myaccount - View account information.",
    "/generatekey <duration> <max_devices> - Generate a new key.",
    "/resetdevice <key_id> - Reset the device ID for a key.",
    "/addbalance <username> <amount> - Add balance to a user's account (Admin only).",
    "/promote <username> <level> - Promote a user to a specified level (Admin only).",
    "/setprice <duration> <price> - Set the price for a key duration (Admin only).",
    "/generatereferral - Generate a referral code (Admin only).",
];

/// Technology stack labels.
const TECH_STACK: [&str; 6] = [
    "Python 3.x",
    "MySQL Database",
    "Telegram Bot API",
    "Flask Web Framework",
    "Secure Password Hashing",
    "Logging System",
];

#[component]
pub fn CommandLists() -> impl IntoView {
    view! {
        <div class="list-grid">
            <div class="enter-left">
                <FeatureSection title="Available Commands" items=&COMMANDS />
            </div>
            <div class="enter-right">
                <FeatureSection title="Technology Stack" items=&TECH_STACK />
            </div>
        </div>
    }
}

#[component]
fn FeatureSection(
    title: &'static str,
    items: &'static [&'static str],
) -> impl IntoView {
    view! {
        <div class="feature-section">
            <h3 class="feature-section-title">{title}</h3>
            <ul class="feature-section-list">
                {items
                    .iter()
                    .map(|item| view! { <li>{*item}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
