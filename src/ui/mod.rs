//! Terminal user interface.
//!
//! - `loop_runner` - main event loop and terminal management
//! - `input` - keyboard dispatch through the keybinding registry
//! - `events` - background content events
//! - `render` - screen layout: header, nav strip, page body, bars
//! - `page` - the page body laid out as lines with section spans
//! - `overlays` - all reviews, gallery and image viewer panels
//! - `help` - keybinding overlay
//! - `status` - status bar
//! - `helpers` - background fetch spawning and link opening

mod events;
mod help;
mod helpers;
mod input;
mod loop_runner;
mod overlays;
pub(crate) mod page;
mod render;
mod status;

pub use helpers::spawn_content_fetch;
pub use loop_runner::{run, Action};
