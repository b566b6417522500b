//! Bill split arithmetic.
//!
//! `user_share` is the only stored share; the friend's share is always
//! `bill - user_share`, so the two always sum to the bill.

/// Who paid the bill upfront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Payer {
    #[default]
    User,
    Friend,
}

impl Payer {
    pub fn other(self) -> Self {
        match self {
            Payer::User => Payer::Friend,
            Payer::Friend => Payer::User,
        }
    }
}

/// Unsaved contents of the split form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SplitDraft {
    pub bill: f64,
    pub payer: Payer,
    pub user_share: f64,
}

impl SplitDraft {
    pub fn friend_share(&self) -> f64 {
        self.bill - self.user_share
    }

    /// Sets the friend's share by moving the remainder to the user.
    pub fn set_friend_share(&mut self, friend_share: f64) {
        self.user_share = self.bill - friend_share;
    }

    /// Amount to add to the selected friend's balance.
    ///
    /// User paid: the friend now owes their share. Friend paid: the user now
    /// owes theirs. No sign or range checks; values flow through as-is.
    pub fn settlement_delta(&self) -> f64 {
        match self.payer {
            Payer::User => self.friend_share(),
            Payer::Friend => -self.user_share,
        }
    }
}

/// Lenient numeric coercion for form input. Anything that is not a finite
/// number reads as zero.
pub fn parse_amount(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}
