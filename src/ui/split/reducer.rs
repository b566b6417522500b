use crate::ledger::{parse_amount, Payer};
use crate::ui::mvi::Reducer;
use crate::ui::split::intent::SplitIntent;
use crate::ui::split::state::{SplitField, SplitFormState};

pub struct SplitReducer;

impl Reducer for SplitReducer {
    type State = SplitFormState;
    type Intent = SplitIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SplitIntent::FocusNext => move_focus(state, 1),
            SplitIntent::FocusPrev => move_focus(state, -1),
            SplitIntent::Focus(field) if state.is_enabled(field) => SplitFormState {
                focus: field,
                buffer: None,
                ..state
            },
            SplitIntent::Focus(_) => state,
            SplitIntent::Insert(ch) => {
                if !(ch.is_ascii_digit() || ch == '.' || ch == '-') {
                    return state;
                }
                edit_buffer(state, |buffer| buffer.push(ch))
            }
            SplitIntent::Backspace => edit_buffer(state, |buffer| {
                buffer.pop();
            }),
            SplitIntent::SetBill(value) => {
                let mut state = state;
                state.draft.bill = value;
                state.buffer = None;
                state
            }
            SplitIntent::SetUserShare(value) => {
                let mut state = state;
                if state.is_enabled(SplitField::UserShare) {
                    state.draft.user_share = value;
                    state.buffer = None;
                }
                state
            }
            SplitIntent::SetFriendShare(value) => {
                let mut state = state;
                if state.is_enabled(SplitField::FriendShare) {
                    state.draft.set_friend_share(value);
                    state.buffer = None;
                }
                state
            }
            SplitIntent::SetPayer(payer) => set_payer(state, payer),
            SplitIntent::TogglePayer => {
                let payer = state.draft.payer.other();
                set_payer(state, payer)
            }
        }
    }
}

/// Moves focus to the next enabled field, wrapping around.
fn move_focus(state: SplitFormState, step: isize) -> SplitFormState {
    let fields = SplitField::ALL;
    let len = fields.len() as isize;
    let current = fields
        .iter()
        .position(|field| *field == state.focus)
        .unwrap_or(0) as isize;

    let mut index = current;
    for _ in 0..fields.len() {
        index = (index + step).rem_euclid(len);
        let candidate = fields[index as usize];
        if state.is_enabled(candidate) {
            return SplitFormState {
                focus: candidate,
                buffer: None,
                ..state
            };
        }
    }
    state
}

/// Applies a text edit to the focused numeric field and writes the coerced
/// value through to the draft.
fn edit_buffer(mut state: SplitFormState, edit: impl FnOnce(&mut String)) -> SplitFormState {
    let field = state.focus;
    if !field.is_numeric() || !state.is_enabled(field) {
        return state;
    }

    let mut buffer = match state.buffer.take() {
        Some(buffer) => buffer,
        // Start from the exact value; the rounded display text would lose digits.
        None => match state.raw_value(field) {
            value if value == 0.0 => String::new(),
            value => value.to_string(),
        },
    };
    edit(&mut buffer);

    let value = parse_amount(&buffer);
    match field {
        SplitField::Bill => state.draft.bill = value,
        SplitField::UserShare => state.draft.user_share = value,
        SplitField::FriendShare => state.draft.set_friend_share(value),
        SplitField::Payer => {}
    }
    state.buffer = Some(buffer);
    state
}

fn set_payer(mut state: SplitFormState, payer: Payer) -> SplitFormState {
    state.draft.payer = payer;
    if !state.is_enabled(state.focus) {
        state.focus = match payer {
            Payer::User => SplitField::UserShare,
            Payer::Friend => SplitField::FriendShare,
        };
        state.buffer = None;
    }
    state
}
