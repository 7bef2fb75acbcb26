//! Text console front end.
//!
//! [`ConsoleInput`] plays every seat from one terminal; the `render`
//! functions turn board, hand and outcomes into text.

pub mod input;
pub mod render;

pub use input::ConsoleInput;
pub use render::{describe_outcome, describe_result, render_board, render_hand, render_menu};
