//! Keyboard event handling tests
//!
//! Tests for mapping key presses to list intents and for the cursor and
//! commit rules those intents drive.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use whale::ui::session::list_event;
use whale::ui::{ListEvent, ListModel, SessionState};
use whale::WhaleError;

/// Helper to create a key event
fn key_event(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

fn press(model: &mut ListModel<&str>, code: KeyCode) -> Result<SessionState, WhaleError> {
    model.handle(list_event(&key_event(code)))
}

#[test]
fn test_quit_keys_cancel() {
    for code in [KeyCode::Char('q'), KeyCode::Esc] {
        let mut model = ListModel::new(vec!["a", "b"]);
        assert_eq!(press(&mut model, code), Ok(SessionState::Cancelled));
        assert_eq!(model.selection(), None);
    }

    let mut model = ListModel::new(vec!["a", "b"]);
    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(
        model.handle(list_event(&ctrl_c)),
        Ok(SessionState::Cancelled)
    );
}

#[test]
fn test_capital_q_does_not_quit() {
    let mut model = ListModel::new(vec!["a", "b"]);
    assert_eq!(press(&mut model, KeyCode::Char('Q')), Ok(SessionState::Active));
}

#[test]
fn test_one_move_down_wraps_three_item_list() {
    let mut model = ListModel::new(vec!["a", "b", "c"]);
    assert_eq!(model.cursor(), Some(2));
    press(&mut model, KeyCode::Down).expect("move");
    assert_eq!(model.cursor(), Some(0));
}

#[test]
fn test_vim_keys_navigate() {
    let mut model = ListModel::new(vec!["a", "b", "c"]);
    press(&mut model, KeyCode::Char('k')).expect("move");
    assert_eq!(model.cursor(), Some(1));
    press(&mut model, KeyCode::Char('j')).expect("move");
    assert_eq!(model.cursor(), Some(2));
}

#[test]
fn test_wrap_around_law() {
    let items = vec!["a", "b", "c", "d", "e"];
    for code in [KeyCode::Down, KeyCode::Up] {
        let mut model = ListModel::new(items.clone());
        // Start somewhere other than the default position.
        press(&mut model, KeyCode::Down).expect("move");
        press(&mut model, KeyCode::Down).expect("move");
        let start = model.cursor();

        for _ in 0..items.len() {
            press(&mut model, code).expect("move");
        }
        assert_eq!(model.cursor(), start, "{code:?}");
    }
}

#[test]
fn test_enter_commits_current_item() {
    let mut model = ListModel::new(vec!["a", "b", "c"]);
    press(&mut model, KeyCode::Up).expect("move");
    press(&mut model, KeyCode::Up).expect("move");
    assert_eq!(press(&mut model, KeyCode::Enter), Ok(SessionState::Committed));
    assert_eq!(model.selection(), Some(&"a"));
}

#[test]
fn test_enter_on_empty_list_fails() {
    let mut model: ListModel<&str> = ListModel::new(Vec::new());
    assert_eq!(
        press(&mut model, KeyCode::Enter),
        Err(WhaleError::EmptySelection)
    );
    assert_ne!(model.state(), SessionState::Committed);
}

#[test]
fn test_unbound_keys_are_ignored() {
    let mut model = ListModel::new(vec!["a", "b"]);
    for code in [
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::Tab,
        KeyCode::Char('/'),
        KeyCode::Backspace,
    ] {
        assert_eq!(list_event(&key_event(code)), ListEvent::Ignored);
        assert_eq!(press(&mut model, code), Ok(SessionState::Active));
    }
    assert_eq!(model.cursor(), Some(1));
}

#[test]
fn test_keys_after_commit_change_nothing() {
    let mut model = ListModel::new(vec!["a", "b"]);
    press(&mut model, KeyCode::Enter).expect("commit");
    press(&mut model, KeyCode::Down).expect("ignored");
    press(&mut model, KeyCode::Esc).expect("ignored");
    assert_eq!(model.state(), SessionState::Committed);
    assert_eq!(model.selection(), Some(&"b"));
}
