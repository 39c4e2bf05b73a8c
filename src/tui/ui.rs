use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{MenuList, ResultView};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

const MENU_HINT: &str = "↑/↓ Move  Enter Select  q Quit";
const RESULT_HINT: &str = "Press any key to continue...";

pub fn draw_ui(frame: &mut Frame, app: &App) {
    use Constraint::{Length, Min};

    let mut menu_list = MenuList::new(&app.menu);
    let layout = Layout::vertical([Length(1), Length(menu_list.height()), Min(0), Length(1)]);
    let [title_area, menu_area, result_area, hint_area] = layout.areas(frame.area());

    let title = Span::styled("sutility", Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(title, title_area);

    menu_list.render(frame, menu_area);

    if let Some(panel) = &app.panel {
        ResultView::new(panel).render(frame, result_area);
    }

    let hint = if app.showing_result() { RESULT_HINT } else { MENU_HINT };
    frame.render_widget(
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
        hint_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::panel::ResultPanel;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App) -> String {
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_menu_only() {
        let app = test_app();
        let text = screen_text(&app);
        assert!(text.contains("sutility"));
        assert!(text.contains("Disk info"));
        assert!(text.contains("q Quit"));
        assert!(!text.contains("Press any key"));
    }

    #[test]
    fn test_draw_with_result_panel() {
        let mut app = test_app();
        app.panel = Some(ResultPanel::selection("Start"));
        let text = screen_text(&app);
        assert!(text.contains("You selected: Start"));
        assert!(text.contains("Press any key to continue..."));
    }

    #[test]
    fn test_draw_tiny_terminal_does_not_panic() {
        let mut app = test_app();
        app.panel = Some(ResultPanel::selection("Start"));
        let backend = TestBackend::new(5, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &app)).unwrap();
    }
}
