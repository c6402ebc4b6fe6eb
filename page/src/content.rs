//! Static content for the Kuro Panel info page.
//!
//! Everything here is a compile-time literal. The page is a pure
//! function of these tables, so nothing can mutate them at runtime and
//! re-rendering always produces the same markup.
//!
//! # Example
//!
//! ```rust
//! use kuro_page::content::{FEATURES, COMMANDS};
//!
//! assert_eq!(FEATURES.len(), 4);
//! assert!(COMMANDS[0].starts_with("/start"));
//! ```

use serde::Serialize;

/// One advertised capability of the panel bot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Short symbol shown next to the title
    pub icon: &'static str,
    /// Card heading
    pub title: &'static str,
    /// One-sentence pitch
    pub description: &'static str,
}

/// Product heading shown in the page header.
pub const PAGE_TITLE: &str = "Telegram Bot Management System";

/// Tagline under the heading.
pub const PAGE_TAGLINE: &str = "A comprehensive solution for user and key management";

/// The four feature tiles, in display order.
pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "👤",
        title: "User Management",
        description: "Complete user registration system with account management and admin controls.",
    },
    Feature {
        icon: "🔑",
        title: "Key System",
        description: "Generate and manage keys with customizable duration and device limits.",
    },
    Feature {
        icon: "💰",
        title: "Balance System",
        description: "Integrated balance management with admin controls and automated deductions.",
    },
    Feature {
        icon: "🔄",
        title: "Referral Program",
        description: "Built-in referral system for user growth and rewards.",
    },
];

/// Bot commands advertised on the page.
///
/// Pre-formatted display strings, shown verbatim and in this order.
/// Nothing parses them; the bot they belong to lives elsewhere.
pub const COMMANDS: [&str; 10] = [
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

/// Technology stack labels, in display order.
pub const TECH_STACK: [&str; 6] = [
    "Python 3.x",
    "MySQL Database",
    "Telegram Bot API",
    "Flask Web Framework",
    "Secure Password Hashing",
    "Logging System",
];

/// Shell one-liner shown in the Getting Started block.
pub const INSTALL_COMMAND: &str = "pip install mysql-connector-python python-telegram-bot Flask";
