use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a friend.
///
/// Seed friends (from config) use integer ids, friends added at runtime get a
/// generated UUID. Only uniqueness matters; ids carry no ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FriendId {
    Seed(u64),
    Generated(String),
}

impl FriendId {
    /// Fresh random id for a friend created at runtime.
    pub fn generate() -> Self {
        Self::Generated(uuid::Uuid::new_v4().to_string())
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FriendId::Seed(id) => write!(f, "{id}"),
            FriendId::Generated(id) => f.write_str(id),
        }
    }
}

/// One person bills are split with.
///
/// `balance` sign: negative means the user owes this friend, positive means
/// the friend owes the user, zero means settled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub balance: f64,
}

impl Friend {
    /// A new friend with a generated id and a zero balance.
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: FriendId::generate(),
            name: name.into(),
            image: image.into(),
            balance: 0.0,
        }
    }

    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::from_balance(self.balance)
    }

    /// Human readable balance line, e.g. "You owe Clark £7".
    pub fn balance_message(&self, currency: &str) -> String {
        match self.status() {
            BalanceStatus::YouOwe(amount) => {
                format!("You owe {} {}{}", self.name, currency, format_amount(amount))
            }
            BalanceStatus::OwesYou(amount) => {
                format!("{} owes you {}{}", self.name, currency, format_amount(amount))
            }
            BalanceStatus::Square => format!("{} and you are square", self.name),
        }
    }
}

/// Classification of a balance. Amounts are absolute values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BalanceStatus {
    YouOwe(f64),
    OwesYou(f64),
    Square,
}

impl BalanceStatus {
    pub fn from_balance(balance: f64) -> Self {
        if balance < 0.0 {
            BalanceStatus::YouOwe(balance.abs())
        } else if balance > 0.0 {
            BalanceStatus::OwesYou(balance)
        } else {
            BalanceStatus::Square
        }
    }
}

/// Formats an amount with at most two decimals, trailing zeros trimmed.
pub fn format_amount(amount: f64) -> String {
    let text = format!("{:.2}", amount);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}
