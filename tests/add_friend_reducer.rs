use splitbill::ui::add_friend::{AddFriendFormState, AddFriendIntent, AddFriendReducer};
use splitbill::ui::mvi::Reducer;

fn expanded(name: &str) -> AddFriendFormState {
    AddFriendFormState {
        expanded: true,
        name: name.to_string(),
    }
}

#[test]
fn toggle_flips_mode() {
    let state = AddFriendReducer::reduce(AddFriendFormState::default(), AddFriendIntent::Toggle);
    assert!(state.expanded);
    assert_eq!(state.toggle_label(), "Close form");
    let state = AddFriendReducer::reduce(state, AddFriendIntent::Toggle);
    assert!(!state.expanded);
    assert_eq!(state.toggle_label(), "Add more friends");
}

#[test]
fn typing_edits_name_when_expanded() {
    let state = expanded("");
    let state = AddFriendReducer::reduce(state, AddFriendIntent::Insert('M'));
    let state = AddFriendReducer::reduce(state, AddFriendIntent::Insert('a'));
    let state = AddFriendReducer::reduce(state, AddFriendIntent::Insert('x'));
    let state = AddFriendReducer::reduce(state, AddFriendIntent::Backspace);
    assert_eq!(state.name, "Ma");
}

#[test]
fn typing_ignored_when_collapsed() {
    let state = AddFriendFormState::default();
    let state = AddFriendReducer::reduce(state, AddFriendIntent::Insert('M'));
    let state = AddFriendReducer::reduce(state, AddFriendIntent::Backspace);
    let state = AddFriendReducer::reduce(state, AddFriendIntent::Clear);
    assert_eq!(state, AddFriendFormState::default());
}

#[test]
fn name_survives_collapse() {
    let state = AddFriendReducer::reduce(expanded("Mar"), AddFriendIntent::Toggle);
    let state = AddFriendReducer::reduce(state, AddFriendIntent::Toggle);
    assert_eq!(state, expanded("Mar"));
}

#[test]
fn clear_empties_name_and_keeps_form_open() {
    let state = AddFriendReducer::reduce(expanded("Maria"), AddFriendIntent::Clear);
    assert_eq!(state, expanded(""));
}

#[test]
fn backspace_on_empty_name_is_harmless() {
    let state = AddFriendReducer::reduce(expanded(""), AddFriendIntent::Backspace);
    assert_eq!(state, expanded(""));
}
