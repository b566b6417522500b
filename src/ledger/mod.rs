//! Friends, balances and bill split arithmetic. No UI types here.

pub mod friend;
pub mod registry;
pub mod selection;
pub mod split;

pub use friend::{format_amount, BalanceStatus, Friend, FriendId};
pub use registry::{FriendRegistry, RegistryError};
pub use selection::{FriendSelection, PLACEHOLDER_NAME};
pub use split::{parse_amount, Payer, SplitDraft};
