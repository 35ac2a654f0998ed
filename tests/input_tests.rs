//! Key decoding and configuration round-trips.

use keyquest::config::Config;
use keyquest::engine::keys::KeyToken;
use keyquest::input::map_event;
use termion::event::{Event, Key, MouseButton, MouseEvent};

#[test]
fn test_decoded_tokens_match_engine_expectations() {
    let cases = vec![
        (Key::Char('d'), Some(KeyToken::Char('d'))),
        (Key::Char('3'), Some(KeyToken::Char('3'))),
        (Key::Char('$'), Some(KeyToken::Char('$'))),
        (Key::Char('\n'), Some(KeyToken::Enter)),
        (Key::Esc, Some(KeyToken::Esc)),
        (Key::Ctrl('c'), Some(KeyToken::CtrlC)),
        (Key::Up, Some(KeyToken::Up)),
        (Key::Down, Some(KeyToken::Down)),
        (Key::Left, Some(KeyToken::Left)),
        (Key::Right, Some(KeyToken::Right)),
        (Key::Backspace, Some(KeyToken::Backspace)),
        (Key::F(5), None),
        (Key::Ctrl('x'), None),
        (Key::PageDown, None),
    ];

    for (key, expected) in cases {
        assert_eq!(map_event(Event::Key(key)), expected, "key: {:?}", key);
    }
}

#[test]
fn test_mouse_events_are_dropped() {
    let event = Event::Mouse(MouseEvent::Press(MouseButton::Left, 1, 1));
    assert_eq!(map_event(event), None);
}

#[test]
fn test_config_round_trips_through_toml() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let config = Config {
        show_status_line: false,
        arrow_keys: false,
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path);
    assert!(!loaded.show_status_line);
    assert!(!loaded.arrow_keys);
}

#[test]
fn test_config_save_creates_parent_directories() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::default().save_to(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "not valid toml [").unwrap();

    let loaded = Config::load_from(&path);
    assert!(loaded.show_status_line);
    assert!(loaded.arrow_keys);
}
