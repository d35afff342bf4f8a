//! Nerd Font icons used throughout the UI, with ASCII fallbacks.

use crate::catalog::{Category, Icon};

// Integration icons
pub const CAT: &str = "󰄛"; // nf-md-cat
pub const DOG: &str = "󰩃"; // nf-md-dog
pub const SMILE: &str = "󰞅"; // nf-md-emoticon_happy_outline
pub const LIGHTBULB: &str = "󰌵"; // nf-md-lightbulb_on_outline
pub const USER: &str = "󰀄"; // nf-md-account
pub const USERS: &str = "󰡉"; // nf-md-account_multiple_outline
pub const GLOBE: &str = "󰖟"; // nf-md-web
pub const MAP_PIN: &str = "󰍎"; // nf-md-map_marker

// Category icons
pub const CATEGORY_DATA: &str = "󰆼"; // nf-md-database
pub const CATEGORY_UTILITY: &str = "󰏗"; // nf-md-package_variant
pub const CATEGORY_ENTERTAINMENT: &str = "󰐌"; // nf-md-play_circle_outline

// Shell
pub const APP: &str = "󰏗"; // nf-md-package_variant
pub const REFRESH: &str = "󰑐"; // nf-md-refresh
pub const ALERT: &str = "󰀦"; // nf-md-alert
pub const SEARCH: &str = "󰍉"; // nf-md-magnify
pub const CHEVRON: &str = "›";

// ASCII fallbacks
pub const CAT_ASCII: &str = "C";
pub const DOG_ASCII: &str = "D";
pub const SMILE_ASCII: &str = ":)";
pub const LIGHTBULB_ASCII: &str = "*";
pub const USER_ASCII: &str = "@";
pub const USERS_ASCII: &str = "@@";
pub const GLOBE_ASCII: &str = "#";
pub const MAP_PIN_ASCII: &str = "+";
pub const ALERT_ASCII: &str = "!";
pub const REFRESH_ASCII: &str = "~";
pub const SEARCH_ASCII: &str = ">";

/// Glyph for an integration icon.
pub fn integration(icon: Icon, ascii: bool) -> &'static str {
    match (icon, ascii) {
        (Icon::Cat, false) => CAT,
        (Icon::Dog, false) => DOG,
        (Icon::Smile, false) => SMILE,
        (Icon::Lightbulb, false) => LIGHTBULB,
        (Icon::User, false) => USER,
        (Icon::Users, false) => USERS,
        (Icon::Globe, false) => GLOBE,
        (Icon::MapPin, false) => MAP_PIN,
        (Icon::Cat, true) => CAT_ASCII,
        (Icon::Dog, true) => DOG_ASCII,
        (Icon::Smile, true) => SMILE_ASCII,
        (Icon::Lightbulb, true) => LIGHTBULB_ASCII,
        (Icon::User, true) => USER_ASCII,
        (Icon::Users, true) => USERS_ASCII,
        (Icon::Globe, true) => GLOBE_ASCII,
        (Icon::MapPin, true) => MAP_PIN_ASCII,
    }
}

pub fn category(category: Category, ascii: bool) -> &'static str {
    if ascii {
        return "";
    }
    match category {
        Category::Data => CATEGORY_DATA,
        Category::Utility => CATEGORY_UTILITY,
        Category::Entertainment => CATEGORY_ENTERTAINMENT,
    }
}

pub fn alert(ascii: bool) -> &'static str {
    if ascii {
        ALERT_ASCII
    } else {
        ALERT
    }
}

pub fn refresh(ascii: bool) -> &'static str {
    if ascii {
        REFRESH_ASCII
    } else {
        REFRESH
    }
}

pub fn search(ascii: bool) -> &'static str {
    if ascii {
        SEARCH_ASCII
    } else {
        SEARCH
    }
}
