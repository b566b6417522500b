use crate::ledger::{format_amount, Payer, SplitDraft};
use crate::ui::mvi::UiState;

/// Focusable rows of the split form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitField {
    #[default]
    Bill,
    UserShare,
    FriendShare,
    Payer,
}

impl SplitField {
    pub const ALL: [SplitField; 4] = [
        SplitField::Bill,
        SplitField::UserShare,
        SplitField::FriendShare,
        SplitField::Payer,
    ];

    pub fn is_numeric(self) -> bool {
        !matches!(self, SplitField::Payer)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SplitFormState {
    pub draft: SplitDraft,
    pub focus: SplitField,
    /// Raw text of the focused numeric field while it is being typed into.
    /// Every edit is coerced and written to `draft` right away.
    pub buffer: Option<String>,
}

impl UiState for SplitFormState {}

impl SplitFormState {
    /// The share input of whoever is not paying is read-only.
    pub fn is_enabled(&self, field: SplitField) -> bool {
        match field {
            SplitField::UserShare => self.draft.payer == Payer::User,
            SplitField::FriendShare => self.draft.payer == Payer::Friend,
            SplitField::Bill | SplitField::Payer => true,
        }
    }

    pub fn friend_share(&self) -> f64 {
        self.draft.friend_share()
    }

    /// Stored value behind a numeric field, unrounded.
    pub fn raw_value(&self, field: SplitField) -> f64 {
        match field {
            SplitField::Bill => self.draft.bill,
            SplitField::UserShare => self.draft.user_share,
            SplitField::FriendShare => self.draft.friend_share(),
            SplitField::Payer => 0.0,
        }
    }

    /// Text shown in a numeric field.
    pub fn field_text(&self, field: SplitField) -> String {
        if field == self.focus {
            if let Some(buffer) = &self.buffer {
                return buffer.clone();
            }
        }
        match field {
            SplitField::Bill => format_amount(self.draft.bill),
            SplitField::UserShare => format_amount(self.draft.user_share),
            SplitField::FriendShare => format_amount(self.draft.friend_share()),
            SplitField::Payer => String::new(),
        }
    }
}
