// App module for the happiness dashboard
// Holds UI state around the dashboard core and maps keys to gestures

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, Focus};
