use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddFriendFormState {
    pub expanded: bool,
    /// Kept across collapse/expand.
    pub name: String,
}

impl UiState for AddFriendFormState {}

impl AddFriendFormState {
    pub fn toggle_label(&self) -> &'static str {
        if self.expanded {
            "Close form"
        } else {
            "Add more friends"
        }
    }

    /// Name ready for submission, or `None` when blank.
    pub fn submittable_name(&self) -> Option<&str> {
        let name = self.name.trim();
        (self.expanded && !name.is_empty()).then_some(name)
    }
}
