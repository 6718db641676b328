//! Command-line interface handling and user interaction

mod args;
mod interaction;
mod output;

pub use args::{parse_args, Args};
pub use interaction::get_user_input;
pub use output::{render_json, render_text};
