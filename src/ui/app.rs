use crate::config::Config;
use crate::ledger::{Friend, FriendRegistry, FriendSelection};
use crate::ui::add_friend::{AddFriendFormState, AddFriendIntent, AddFriendReducer};
use crate::ui::mvi::Reducer;
use crate::ui::split::{SplitFormState, SplitIntent, SplitReducer};

/// Which pane receives key input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum Focus {
    #[default]
    FriendList,
    AddFriend,
    SplitBill,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::FriendList => Focus::AddFriend,
            Focus::AddFriend => Focus::SplitBill,
            Focus::SplitBill => Focus::FriendList,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::FriendList => Focus::SplitBill,
            Focus::AddFriend => Focus::FriendList,
            Focus::SplitBill => Focus::AddFriend,
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owns every state container and applies cross-container events.
pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Highlighted row of the friend list.
    cursor: usize,
    registry: FriendRegistry,
    selection: FriendSelection,
    add_form: AddFriendFormState,
    split_form: SplitFormState,
    currency: String,
    placeholder_avatar: String,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::with_friends(config, config.friends.clone())
    }

    /// Like [`App::new`] but with an explicit starting friend list.
    pub fn with_friends(config: &Config, friends: Vec<Friend>) -> Self {
        Self {
            should_quit: false,
            focus: Focus::default(),
            cursor: 0,
            registry: FriendRegistry::with_friends(friends),
            selection: FriendSelection::new(),
            add_form: AddFriendFormState::default(),
            split_form: SplitFormState::default(),
            currency: config.defaults.currency_symbol.clone(),
            placeholder_avatar: config.defaults.placeholder_avatar.clone(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn registry(&self) -> &FriendRegistry {
        &self.registry
    }

    pub fn selection(&self) -> &FriendSelection {
        &self.selection
    }

    pub fn add_form(&self) -> &AddFriendFormState {
        &self.add_form
    }

    pub fn split_form(&self) -> &SplitFormState {
        &self.split_form
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    // ========================================================================
    // Friend list
    // ========================================================================

    pub fn move_cursor(&mut self, direction: i32) {
        let len = self.registry.len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let current = self.cursor.min(len - 1);
        self.cursor = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    /// Selects the highlighted friend as split target.
    pub fn select_highlighted(&mut self) -> bool {
        let Some(friend) = self.registry.friends().get(self.cursor) else {
            return false;
        };
        tracing::debug!(id = %friend.id, name = %friend.name, "Friend selected");
        self.selection.select(friend);
        true
    }

    // ========================================================================
    // Add-friend form (MVI pattern)
    // ========================================================================

    pub fn dispatch_add_friend(&mut self, intent: AddFriendIntent) {
        dispatch_mvi!(self, add_form, AddFriendReducer, intent);
    }

    /// Opens or closes the add-friend form. Focus follows the form.
    pub fn toggle_add_form(&mut self) {
        self.dispatch_add_friend(AddFriendIntent::Toggle);
        self.focus = if self.add_form.expanded {
            Focus::AddFriend
        } else {
            Focus::FriendList
        };
    }

    /// Builds a friend from the form and hands it to the registry.
    ///
    /// A blank name is dropped without any state change. The form stays open
    /// after a successful add.
    pub fn submit_new_friend(&mut self) -> bool {
        let Some(name) = self.add_form.submittable_name() else {
            tracing::debug!("Add friend ignored: empty name");
            return false;
        };
        let friend = Friend::new(name, self.placeholder_avatar.as_str());
        let id = friend.id.clone();

        if let Err(err) = self.registry.add(friend) {
            tracing::debug!(error = %err, "Add friend rejected");
            return false;
        }
        tracing::info!(%id, name, "Friend added");
        self.cursor = self.registry.len() - 1;
        self.dispatch_add_friend(AddFriendIntent::Clear);
        true
    }

    // ========================================================================
    // Split-bill form (MVI pattern)
    // ========================================================================

    /// Split input is ignored until a friend is selected.
    pub fn dispatch_split(&mut self, intent: SplitIntent) {
        if self.selection.current().is_none() {
            return;
        }
        dispatch_mvi!(self, split_form, SplitReducer, intent);
    }

    /// Applies the drafted split to the selected friend's balance.
    ///
    /// The target is re-derived by id from the registry. Form fields are kept.
    pub fn submit_split(&mut self) -> bool {
        let Some(id) = self.selection.id().cloned() else {
            return false;
        };
        let delta = self.split_form.draft.settlement_delta();

        if !self.registry.adjust_balance(&id, delta) {
            tracing::debug!(%id, "Split ignored: friend no longer in registry");
            return false;
        }
        tracing::info!(
            %id,
            bill = self.split_form.draft.bill,
            payer = ?self.split_form.draft.payer,
            delta,
            "Split applied"
        );
        self.selection.refresh(&self.registry);
        true
    }
}
