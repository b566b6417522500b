use crate::ledger::Payer;
use crate::ui::mvi::Intent;
use crate::ui::split::state::SplitField;

#[derive(Debug, Clone, PartialEq)]
pub enum SplitIntent {
    FocusNext,
    FocusPrev,
    Focus(SplitField),
    /// Typed character for the focused numeric field.
    Insert(char),
    Backspace,
    SetBill(f64),
    SetUserShare(f64),
    /// Rewrites the user's share as `bill - value`.
    SetFriendShare(f64),
    SetPayer(Payer),
    TogglePayer,
}

impl Intent for SplitIntent {}
