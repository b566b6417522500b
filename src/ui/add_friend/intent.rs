use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum AddFriendIntent {
    /// Flip between collapsed and expanded.
    Toggle,
    Insert(char),
    Backspace,
    /// Empty the name field after a successful add.
    Clear,
}

impl Intent for AddFriendIntent {}
