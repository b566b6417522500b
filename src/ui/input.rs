use crate::ledger::Payer;
use crate::ui::add_friend::AddFriendIntent;
use crate::ui::app::{App, Focus};
use crate::ui::split::{SplitField, SplitIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        _ => {}
    }

    match app.focus() {
        Focus::FriendList => handle_list_key(app, key),
        Focus::AddFriend => handle_add_friend_key(app, key),
        Focus::SplitBill => handle_split_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::Enter => {
            if app.select_highlighted() {
                app.set_focus(Focus::SplitBill);
            }
        }
        KeyCode::Char('a') => app.toggle_add_form(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_add_friend_key(app: &mut App, key: KeyEvent) {
    if !app.add_form().expanded {
        // Collapsed form only offers its toggle.
        if matches!(key.code, KeyCode::Enter | KeyCode::Char('a')) {
            app.toggle_add_form();
        } else if key.code == KeyCode::Esc {
            app.set_focus(Focus::FriendList);
        }
        return;
    }

    match key.code {
        KeyCode::Enter => {
            app.submit_new_friend();
        }
        KeyCode::Esc => app.toggle_add_form(),
        KeyCode::Backspace => app.dispatch_add_friend(AddFriendIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_add_friend(AddFriendIntent::Insert(ch));
        }
        _ => {}
    }
}

fn handle_split_key(app: &mut App, key: KeyEvent) {
    let on_payer = app.split_form().focus == SplitField::Payer;
    match key.code {
        KeyCode::Esc => app.set_focus(Focus::FriendList),
        KeyCode::Enter => {
            app.submit_split();
        }
        KeyCode::Down => app.dispatch_split(SplitIntent::FocusNext),
        KeyCode::Up => app.dispatch_split(SplitIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_split(SplitIntent::Backspace),
        KeyCode::Left if on_payer => app.dispatch_split(SplitIntent::SetPayer(Payer::User)),
        KeyCode::Right if on_payer => app.dispatch_split(SplitIntent::SetPayer(Payer::Friend)),
        KeyCode::Char(' ') if on_payer => app.dispatch_split(SplitIntent::TogglePayer),
        KeyCode::Char(ch) => app.dispatch_split(SplitIntent::Insert(ch)),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
