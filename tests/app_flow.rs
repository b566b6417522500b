//! End-to-end flows driven through key events, the same path the terminal
//! loop takes.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use splitbill::config::Config;
use splitbill::ledger::{Friend, FriendId};
use splitbill::ui::app::{App, Focus};
use splitbill::ui::input::handle_key;

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn single_friend_app() -> App {
    let friend = Friend {
        id: FriendId::Seed(1),
        name: "Clark".to_string(),
        image: "https://i.pravatar.cc/48?u=1".to_string(),
        balance: -7.0,
    };
    App::with_friends(&Config::default(), vec![friend])
}

fn balance_of(app: &App, id: &FriendId) -> f64 {
    app.registry().get(id).map(|f| f.balance).unwrap_or(f64::NAN)
}

#[test]
fn user_pays_split_adds_friend_share() {
    let mut app = single_friend_app();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.focus(), Focus::SplitBill);
    assert_eq!(app.selection().display_name(), "Clark");

    type_text(&mut app, "100");
    press(&mut app, KeyCode::Down);
    type_text(&mut app, "40");
    assert_eq!(app.split_form().friend_share(), 60.0);

    press(&mut app, KeyCode::Enter);
    assert_eq!(balance_of(&app, &FriendId::Seed(1)), 53.0);
}

#[test]
fn friend_pays_split_subtracts_user_share() {
    let mut app = single_friend_app();
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "100");
    press(&mut app, KeyCode::Down);
    type_text(&mut app, "40");
    // Friend share is disabled while the user pays, so Down lands on payer.
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Right);

    press(&mut app, KeyCode::Enter);
    assert_eq!(balance_of(&app, &FriendId::Seed(1)), -47.0);
}

#[test]
fn form_is_not_reset_after_split() {
    let mut app = single_friend_app();
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "10");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    // Two submissions of the same draft apply twice.
    assert_eq!(balance_of(&app, &FriendId::Seed(1)), 13.0);
    assert_eq!(app.split_form().draft.bill, 10.0);
}

#[test]
fn selected_panel_tracks_balance_after_split() {
    let mut app = single_friend_app();
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "7");
    press(&mut app, KeyCode::Enter);
    let selected = app.selection().current().map(|f| f.balance);
    assert_eq!(selected, Some(0.0));
}

#[test]
fn adding_maria_appends_square_friend() {
    let mut app = App::new(&Config::default());
    let before = app.registry().len();

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.focus(), Focus::AddFriend);
    type_text(&mut app, "Maria");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.registry().len(), before + 1);
    let maria = app.registry().friends().last().cloned();
    let maria = maria.as_ref();
    assert_eq!(maria.map(|f| f.name.as_str()), Some("Maria"));
    assert_eq!(maria.map(|f| f.balance), Some(0.0));
    assert_eq!(
        maria.map(|f| f.image.as_str()),
        Some("https://i.pravatar.cc/48")
    );
    // Form stays open with a cleared field.
    assert!(app.add_form().expanded);
    assert_eq!(app.add_form().name, "");
}

#[test]
fn adding_several_friends_in_a_row() {
    let mut app = App::new(&Config::default());
    press(&mut app, KeyCode::Char('a'));
    for name in ["Maria", "Jon"] {
        type_text(&mut app, name);
        press(&mut app, KeyCode::Enter);
    }
    let names: Vec<&str> = app
        .registry()
        .friends()
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["Clark", "Sarah", "Anthony", "Maria", "Jon"]);
}

#[test]
fn empty_name_is_silently_ignored() {
    let mut app = App::new(&Config::default());
    let before = app.registry().clone();

    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.registry(), &before);
    assert!(app.add_form().expanded);
    assert_eq!(app.add_form().name, "   ");
}

#[test]
fn escape_closes_add_form() {
    let mut app = App::new(&Config::default());
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Esc);
    assert!(!app.add_form().expanded);
    assert_eq!(app.focus(), Focus::FriendList);
    assert!(!app.should_quit());
}

#[test]
fn selecting_another_friend_replaces_target() {
    let mut app = App::new(&Config::default());
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.selection().display_name(), "Clark");
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.selection().display_name(), "Sarah");
}

#[test]
fn split_keys_do_nothing_without_selection() {
    let mut app = App::new(&Config::default());
    let before = app.registry().clone();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::SplitBill);
    type_text(&mut app, "50");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.split_form().draft.bill, 0.0);
    assert_eq!(app.registry(), &before);
}

#[test]
fn ctrl_q_quits_from_any_pane() {
    let mut app = App::new(&Config::default());
    press(&mut app, KeyCode::Char('a'));
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
}

#[test]
fn key_release_is_ignored() {
    let mut app = App::new(&Config::default());
    let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    key.kind = KeyEventKind::Release;
    handle_key(&mut app, key);
    assert!(!app.should_quit());
}

#[test]
fn escape_on_friend_list_does_not_quit() {
    let mut app = App::new(&Config::default());
    press(&mut app, KeyCode::Esc);
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn adding_a_friend_moves_cursor_to_it() {
    let mut app = App::new(&Config::default());
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Maria");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.cursor(), 3);
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.selection().display_name(), "Maria");
}
