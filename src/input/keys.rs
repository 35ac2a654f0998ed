//! Keyboard event decoding: termion events to engine key tokens.

use crate::engine::keys::KeyToken;
use termion::event::{Event, Key};

/// Maps a termion event to a [`KeyToken`], or `None` for events the engine
/// has no representation for (mouse, function keys, unsupported chords).
///
/// The engine never sees raw terminal input; this is the single place raw
/// events are normalized.
///
/// # Example
///
/// ```
/// use termion::event::{Event, Key};
/// use keyquest::engine::keys::KeyToken;
/// use keyquest::input::keys::map_event;
///
/// let event = Event::Key(Key::Char('d'));
/// assert_eq!(map_event(event), Some(KeyToken::Char('d')));
/// ```
pub fn map_event(event: Event) -> Option<KeyToken> {
    let key = match event {
        Event::Key(k) => k,
        _ => return None,
    };

    match key {
        Key::Char('\n') => Some(KeyToken::Enter),
        Key::Char(c) => Some(KeyToken::Char(c)),
        Key::Esc => Some(KeyToken::Esc),
        Key::Ctrl('c') => Some(KeyToken::CtrlC),
        Key::Up => Some(KeyToken::Up),
        Key::Down => Some(KeyToken::Down),
        Key::Left => Some(KeyToken::Left),
        Key::Right => Some(KeyToken::Right),
        Key::Backspace => Some(KeyToken::Backspace),
        _ => None,
    }
}
