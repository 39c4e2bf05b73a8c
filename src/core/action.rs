//! # Actions
//!
//! Everything that can happen in sutility becomes an `Action`.
//! User presses Down? That's `Action::MoveDown`.
//! A disk query finishes? That's `Action::ShowResult(panel)`.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! `update()` never touches the disk or the terminal. When a selection needs
//! data, it returns `Effect::Query` and the event loop runs the query, then
//! feeds the outcome back as `ShowResult`.
//!
//! Two modes fall out of `App::panel`:
//!
//! - `None`: menu displayed, awaiting input.
//! - `Some(_)`: result displayed; the next key of any kind dismisses it.

use log::debug;

use crate::core::menu::{MenuAction, MenuState};
use crate::core::panel::ResultPanel;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    Confirm,
    Quit,
    /// A key with no menu binding.
    AnyKey,
    ShowResult(ResultPanel),
}

/// A lookup the event loop performs on the reducer's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    DiskUsage,
    Battery,
}

/// Side effects the event loop must carry out after `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Run the query and send back `ShowResult`.
    Query(Query),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);

    if let Action::ShowResult(panel) = action {
        app.panel = Some(panel);
        return Effect::None;
    }

    // Any key acknowledges a result panel, 'q' included.
    if app.panel.take().is_some() {
        return Effect::None;
    }

    match action {
        Action::MoveUp => {
            app.menu.move_up();
            Effect::None
        }
        Action::MoveDown => {
            app.menu.move_down();
            Effect::None
        }
        Action::Confirm => {
            match app.menu.activate() {
                selected if MenuState::should_quit(selected) => Effect::Quit,
                MenuAction::ShowDiskInfo => Effect::Query(Query::DiskUsage),
                MenuAction::ShowBatteryInfo => Effect::Query(Query::Battery),
                _ => {
                    app.panel = Some(ResultPanel::selection(&app.menu.selected_item().label));
                    Effect::None
                }
            }
        }
        Action::Quit => Effect::Quit,
        Action::AnyKey | Action::ShowResult(_) => Effect::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::menu::MenuItem;
    use crate::test_support::test_app;
    use std::path::PathBuf;

    #[test]
    fn test_moves_update_selection() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::MoveDown), Effect::None);
        assert_eq!(app.menu.selected(), 1);
        assert_eq!(update(&mut app, Action::MoveUp), Effect::None);
        assert_eq!(app.menu.selected(), 0);
    }

    #[test]
    fn test_confirm_disk_requests_query() {
        let mut app = test_app();
        assert_eq!(
            update(&mut app, Action::Confirm),
            Effect::Query(Query::DiskUsage)
        );
        assert!(!app.showing_result());
    }

    #[test]
    fn test_confirm_battery_requests_query() {
        let mut app = test_app();
        update(&mut app, Action::MoveDown);
        assert_eq!(
            update(&mut app, Action::Confirm),
            Effect::Query(Query::Battery)
        );
    }

    #[test]
    fn test_confirm_quit_item_quits() {
        let mut app = test_app();
        update(&mut app, Action::MoveDown);
        update(&mut app, Action::MoveDown);
        assert_eq!(update(&mut app, Action::Confirm), Effect::Quit);
    }

    #[test]
    fn test_quit_key_quits_from_menu() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_generic_item_shows_selection_without_query() {
        let menu = MenuState::new(vec![
            MenuItem::new("Start", MenuAction::Generic),
            MenuItem::new("Quit", MenuAction::Quit),
        ])
        .unwrap();
        let mut app = App::new(menu, PathBuf::from("/"));

        assert_eq!(update(&mut app, Action::Confirm), Effect::None);
        let panel = app.panel.as_ref().unwrap();
        assert_eq!(panel.lines, vec!["You selected: Start".to_string()]);
    }

    #[test]
    fn test_any_key_in_menu_is_noop() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::AnyKey), Effect::None);
        assert_eq!(app.menu.selected(), 0);
        assert!(!app.showing_result());
    }

    #[test]
    fn test_show_result_then_any_key_dismisses() {
        let mut app = test_app();
        update(&mut app, Action::ShowResult(ResultPanel::selection("x")));
        assert!(app.showing_result());

        assert_eq!(update(&mut app, Action::AnyKey), Effect::None);
        assert!(!app.showing_result());
    }

    #[test]
    fn test_keys_on_result_only_dismiss() {
        for action in [Action::MoveUp, Action::MoveDown, Action::Confirm, Action::Quit] {
            let mut app = test_app();
            update(&mut app, Action::MoveDown);
            update(&mut app, Action::ShowResult(ResultPanel::selection("x")));

            assert_eq!(update(&mut app, action), Effect::None);
            assert!(!app.showing_result());
            assert_eq!(app.menu.selected(), 1);
        }
    }
}
