use crate::ui::add_friend::intent::AddFriendIntent;
use crate::ui::add_friend::state::AddFriendFormState;
use crate::ui::mvi::Reducer;

pub struct AddFriendReducer;

impl Reducer for AddFriendReducer {
    type State = AddFriendFormState;
    type Intent = AddFriendIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AddFriendIntent::Toggle => AddFriendFormState {
                expanded: !state.expanded,
                ..state
            },
            // The name input only exists while expanded.
            _ if !state.expanded => state,
            AddFriendIntent::Insert(ch) => {
                let mut name = state.name;
                name.push(ch);
                AddFriendFormState { name, ..state }
            }
            AddFriendIntent::Backspace => {
                let mut name = state.name;
                name.pop();
                AddFriendFormState { name, ..state }
            }
            AddFriendIntent::Clear => AddFriendFormState {
                name: String::new(),
                ..state
            },
        }
    }
}
