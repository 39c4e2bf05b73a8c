//! # TUI Components
//!
//! Stateless, props-based pieces of the screen. Each is built per frame from
//! borrowed core state and implements [`Component`](super::component::Component):
//!
//! - `MenuList`: the selectable entries, highlighted row reversed
//! - `ResultView`: the panel shown after a selection
//!
//! Each component file holds its rendering logic and its tests.

mod menu_list;
mod result_view;

pub use menu_list::MenuList;
pub use result_view::ResultView;
