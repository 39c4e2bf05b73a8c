//! # Application State
//!
//! Core state for sutility. No terminal types live here; presentation
//! details belong to the `tui` module.
//!
//! ```text
//! App
//! ├── menu: MenuState               // entries + highlighted index
//! ├── panel: Option<ResultPanel>    // Some = result displayed, awaiting a key
//! └── disk_path: PathBuf            // filesystem the disk query inspects
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::path::PathBuf;

use crate::core::config::ResolvedConfig;
use crate::core::menu::MenuState;
use crate::core::panel::ResultPanel;

pub struct App {
    pub menu: MenuState,
    pub panel: Option<ResultPanel>,
    pub disk_path: PathBuf,
}

impl App {
    pub fn new(menu: MenuState, disk_path: PathBuf) -> Self {
        Self {
            menu,
            panel: None,
            disk_path,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            MenuState::default_menu(&config.extra_items),
            config.disk_path.clone(),
        )
    }

    /// True while a result panel is waiting to be acknowledged.
    pub fn showing_result(&self) -> bool {
        self.panel.is_some()
    }
}
