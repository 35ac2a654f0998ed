//! Input handling: decoding terminal events into engine key tokens.

pub mod handler;
pub mod keys;

pub use handler::InputHandler;
pub use keys::map_event;
