//! # Menu Controller
//!
//! The ordered list of menu entries and the highlighted index.
//!
//! Each entry carries a [`MenuAction`] tag, so dispatch never depends on an
//! entry's position. The cursor clamps at both ends: moving past the top or
//! bottom is silently ignored.

/// What selecting an entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ShowDiskInfo,
    ShowBatteryInfo,
    Quit,
    /// No query; selecting it just echoes the label.
    Generic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub action: MenuAction,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// Menu entries plus the cursor. `selected` is always a valid index.
#[derive(Debug, Clone)]
pub struct MenuState {
    items: Vec<MenuItem>,
    selected: usize,
}

impl MenuState {
    /// Returns `None` for an empty item list.
    pub fn new(items: Vec<MenuItem>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self { items, selected: 0 })
    }

    /// Disk info, battery info, any extra generic entries, then Quit last.
    pub fn default_menu(extra_items: &[String]) -> Self {
        let mut items = vec![
            MenuItem::new("Disk info", MenuAction::ShowDiskInfo),
            MenuItem::new("Battery info", MenuAction::ShowBatteryInfo),
        ];
        items.extend(
            extra_items
                .iter()
                .map(|label| MenuItem::new(label.as_str(), MenuAction::Generic)),
        );
        items.push(MenuItem::new("Quit", MenuAction::Quit));
        Self { items, selected: 0 }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> &MenuItem {
        &self.items[self.selected]
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    /// The tag of the highlighted entry. Does not change state.
    pub fn activate(&self) -> MenuAction {
        self.selected_item().action
    }

    pub fn should_quit(action: MenuAction) -> bool {
        action == MenuAction::Quit
    }
}
