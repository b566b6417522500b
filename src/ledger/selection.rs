use crate::ledger::friend::{Friend, FriendId};
use crate::ledger::registry::FriendRegistry;

/// Shown wherever a friend name is needed but nobody is selected.
pub const PLACEHOLDER_NAME: &str = "Friend";

/// The friend currently targeted by the split form.
///
/// Holds a snapshot, not a live reference: balance changes in the registry
/// are not visible here until [`FriendSelection::refresh`] or a new
/// [`FriendSelection::select`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FriendSelection {
    current: Option<Friend>,
}

impl FriendSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the target. There is no way back to "nothing selected".
    pub fn select(&mut self, friend: &Friend) {
        self.current = Some(friend.clone());
    }

    pub fn current(&self) -> Option<&Friend> {
        self.current.as_ref()
    }

    pub fn id(&self) -> Option<&FriendId> {
        self.current.as_ref().map(|friend| &friend.id)
    }

    pub fn is_selected(&self, id: &FriendId) -> bool {
        self.id() == Some(id)
    }

    pub fn display_name(&self) -> &str {
        self.current
            .as_ref()
            .map(|friend| friend.name.as_str())
            .unwrap_or(PLACEHOLDER_NAME)
    }

    /// Re-snapshots the selected friend from the registry. Keeps the old
    /// snapshot if the id no longer resolves.
    pub fn refresh(&mut self, registry: &FriendRegistry) {
        let Some(id) = self.id() else {
            return;
        };
        if let Some(fresh) = registry.get(id) {
            self.current = Some(fresh.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clark(balance: f64) -> Friend {
        Friend {
            id: FriendId::Seed(118836),
            name: "Clark".to_string(),
            image: String::new(),
            balance,
        }
    }

    #[test]
    fn starts_empty_with_placeholder() {
        let selection = FriendSelection::new();
        assert!(selection.current().is_none());
        assert_eq!(selection.display_name(), "Friend");
    }

    #[test]
    fn snapshot_does_not_track_registry() {
        let mut registry = FriendRegistry::with_friends(vec![clark(-7.0)]);
        let mut selection = FriendSelection::new();
        selection.select(&registry.friends()[0]);
        registry.adjust_balance(&FriendId::Seed(118836), 10.0);
        assert_eq!(selection.current().map(|f| f.balance), Some(-7.0));

        selection.refresh(&registry);
        assert_eq!(selection.current().map(|f| f.balance), Some(3.0));
    }

    #[test]
    fn refresh_keeps_snapshot_for_unknown_id() {
        let registry = FriendRegistry::new();
        let mut selection = FriendSelection::new();
        selection.select(&clark(-7.0));
        selection.refresh(&registry);
        assert_eq!(selection.display_name(), "Clark");
    }
}
