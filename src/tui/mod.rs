//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, renders the menu, and
//! translates key presses into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Strictly one thing at a time on one thread:
//!
//! ```text
//! draw → block for a key → update() → [run query → ShowResult] → draw ...
//! ```
//!
//! There is no polling timer: the screen only changes in response to a key
//! or a resize, so the loop sleeps inside the blocking read.

mod component;
mod components;
mod event;
mod screen;
mod ui;

use log::{info, warn};
use std::io;
use std::path::Path;

use crate::core::action::{Action, Effect, Query, update};
use crate::core::config::ResolvedConfig;
use crate::core::panel::ResultPanel;
use crate::core::state::App;
use crate::sysinfo::{BatteryPaths, SystemInfoProvider};

pub use event::{TuiEvent, map_event};
pub use screen::{Screen, TerminalScreen};
pub use ui::draw_ui;

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let provider = SystemInfoProvider::linux(
        BatteryPaths::from_device_dir(&config.battery_dir),
        config.read_limit,
    );
    let mut app = App::from_config(&config);
    let screen = TerminalScreen::acquire()?;

    run_loop(screen, &mut app, &provider)
}

/// Drive the menu until the user quits.
///
/// Takes the screen by value: it is released when this returns, whether by
/// quitting or by a terminal I/O error. Query failures never end the loop.
pub fn run_loop<S: Screen>(
    mut screen: S,
    app: &mut App,
    provider: &SystemInfoProvider,
) -> io::Result<()> {
    loop {
        screen.draw(app)?;

        let Some(action) = screen.next_event()?.to_action() else {
            continue;
        };

        match update(app, action) {
            Effect::Quit => {
                info!("Quit requested");
                return Ok(());
            }
            Effect::Query(query) => {
                let panel = run_query(query, &app.disk_path, provider);
                update(app, Action::ShowResult(panel));
            }
            Effect::None => {}
        }
    }
}

fn run_query(query: Query, disk_path: &Path, provider: &SystemInfoProvider) -> ResultPanel {
    match query {
        Query::DiskUsage => {
            info!("Querying disk usage for {}", disk_path.display());
            let result = provider.query_disk_usage(disk_path);
            if let Err(e) = &result {
                warn!("Disk query failed: {}", e);
            }
            ResultPanel::disk(disk_path, &result)
        }
        Query::Battery => {
            info!("Querying battery info");
            ResultPanel::battery(&provider.query_battery_info())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sysinfo::{FsStats, GIB};
    use crate::test_support::{FakeStatFs, FakeText, test_app, test_provider};

    #[test]
    fn test_run_query_disk_success() {
        let provider = test_provider(
            FakeStatFs::ok(FsStats {
                block_size: GIB,
                total_blocks: 100,
                free_blocks: 40,
                available_blocks: 35,
            }),
            FakeText::default(),
        );
        let panel = run_query(Query::DiskUsage, Path::new("/"), &provider);
        assert!(!panel.is_error);
        assert!(panel.lines[1].contains("60.0%"));
    }

    #[test]
    fn test_run_query_disk_failure_is_panel() {
        let provider = test_provider(FakeStatFs::failing(), FakeText::default());
        let panel = run_query(Query::DiskUsage, Path::new("/missing"), &provider);
        assert!(panel.is_error);
        assert!(panel.lines[0].contains("/missing"));
    }

    #[test]
    fn test_run_query_battery() {
        let text = FakeText::default()
            .with("/bat/capacity", "87\n")
            .with("/bat/status", "Charging\n");
        let provider = test_provider(FakeStatFs::failing(), text);
        let panel = run_query(Query::Battery, Path::new("/"), &provider);
        assert_eq!(panel.lines, vec!["Battery: 87% (Charging)".to_string()]);
    }

    #[test]
    fn test_app_disk_path_drives_query() {
        let app = test_app();
        let provider = test_provider(FakeStatFs::failing(), FakeText::default());
        let panel = run_query(Query::DiskUsage, &app.disk_path, &provider);
        assert_eq!(panel.title, "Disk usage: /");
    }
}
