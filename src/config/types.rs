use serde::{Deserialize, Serialize};

use crate::ledger::{Friend, FriendId};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    /// Friends present at startup, in display order.
    #[serde(default = "default_friends")]
    pub friends: Vec<Friend>,
}

/// Default settings for the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Symbol printed in front of amounts (default: "£").
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Avatar URI given to friends added from the form.
    #[serde(default = "default_placeholder_avatar")]
    pub placeholder_avatar: String,
    /// UI tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Log filter used when SPLITBILL_LOG is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_currency_symbol() -> String {
    "£".to_string()
}

fn default_placeholder_avatar() -> String {
    "https://i.pravatar.cc/48".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

fn seed_friend(id: u64, name: &str, balance: f64) -> Friend {
    Friend {
        id: FriendId::Seed(id),
        name: name.to_string(),
        image: format!("https://i.pravatar.cc/48?u={id}"),
        balance,
    }
}

fn default_friends() -> Vec<Friend> {
    vec![
        seed_friend(118836, "Clark", -7.0),
        seed_friend(933372, "Sarah", 20.0),
        seed_friend(499476, "Anthony", 0.0),
    ]
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            placeholder_avatar: default_placeholder_avatar(),
            tick_rate_ms: default_tick_rate_ms(),
            log_level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            friends: default_friends(),
        }
    }
}
