use super::Frame;
use crate::pipeline::PageSize;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

/// Render any open popup on top of the dashboard.
///
pub fn popup(frame: &mut Frame, size: Rect, state: &State) {
    if let Some(message) = state.get_alert() {
        alert(frame, size, message, state);
    } else if state.is_page_size_menu() {
        page_size_menu(frame, size, state);
    }
}

fn alert(frame: &mut Frame, size: Rect, message: &str, state: &State) {
    let theme = state.get_theme();
    let area = centered_rect(50, 20, size);
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            styling::normal_text_style(theme),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            styling::muted_text_style(theme),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .title("Notice")
                .borders(Borders::ALL)
                .border_style(styling::active_block_border_style(theme)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn page_size_menu(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let area = centered_rect(20, 30, size);
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = PageSize::ALL
        .iter()
        .map(|size| ListItem::new(size.to_string()).style(styling::normal_text_style(theme)))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title("Rows per page")
                .borders(Borders::ALL)
                .border_style(styling::active_block_border_style(theme)),
        )
        .highlight_style(styling::selected_row_style(theme))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.get_page_size_menu_index()));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Return a rect centered in `r` taking the given percentages of its size.
///
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(50, 20, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 10);
        assert_eq!(inner.x, 25);
        assert_eq!(inner.y, 20);
    }
}
