//! # Menu List Component
//!
//! The selectable list of menu entries. The highlighted row is drawn
//! reversed, the way a curses menu marks its cursor.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::core::menu::MenuState;
use crate::tui::component::Component;

pub struct MenuList<'a> {
    menu: &'a MenuState,
    list_state: ListState,
}

impl<'a> MenuList<'a> {
    pub fn new(menu: &'a MenuState) -> Self {
        let list_state = ListState::default().with_selected(Some(menu.selected()));
        Self { menu, list_state }
    }

    /// Rows needed to show every entry plus the border.
    pub fn height(&self) -> u16 {
        u16::try_from(self.menu.items().len())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
    }
}

impl Component for MenuList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .menu
            .items()
            .iter()
            .map(|item| ListItem::new(item.label.as_str()))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Menu "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}
