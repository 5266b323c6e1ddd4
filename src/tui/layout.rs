use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::config::ColorConfig;
use crate::tui::app::PickerApp;

pub fn render(frame: &mut Frame, app: &mut PickerApp, colors: &ColorConfig) {
    let visible = app.lines.len().clamp(1, app.page_size) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // Column header
            Constraint::Length(visible + 2), // List with borders
            Constraint::Length(1),           // Key help
            Constraint::Min(0),
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0], colors);
    render_list(frame, app, chunks[1], colors);
    render_help(frame, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &PickerApp, area: Rect, colors: &ColorConfig) {
    let header = Paragraph::new(Line::from(app.header.as_str()))
        .style(Style::default().fg(colors.title).add_modifier(Modifier::BOLD));
    frame.render_widget(header, area);
}

fn render_list(frame: &mut Frame, app: &mut PickerApp, area: Rect, colors: &ColorConfig) {
    let items: Vec<ListItem> = app
        .lines
        .iter()
        .map(|line| ListItem::new(line.as_str()))
        .collect();

    let title = format!(
        " {} [{}/{}] ",
        app.label,
        (app.index + 1).min(app.lines.len()),
        app.lines.len()
    );

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bookmark_count));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(colors.selection_bg)
                .fg(colors.selection_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(" Enter: open  j/k: move  n/p: page  q/Esc: cancel ")
        .style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_render_shows_label_and_lines() {
        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = PickerApp::new(
            "pick one".into(),
            " Bookmark | Title".into(),
            vec![" 12       | Rust | https://example.com".into()],
            30,
        );

        terminal
            .draw(|frame| render(frame, &mut app, &ColorConfig::default()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("pick one [1/1]"));
        assert!(text.contains("Rust"));
        assert!(text.contains("Bookmark"));
    }
}
