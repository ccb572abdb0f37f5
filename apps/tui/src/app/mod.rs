// App module for roster_radar
// Handles application state and roster actions

pub mod actions;
pub mod input;
pub mod state;

pub use input::{handle_input, handle_paste};
pub use state::App;
