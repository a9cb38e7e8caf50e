use super::Frame;
use crate::pipeline::SortField;
use crate::state::State;
use crate::ui::widgets::{spinner, styling};
use crate::utils::text_processing::{single_line, truncate};
use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

/// Render the post table for the current page.
///
pub fn table(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let mut title = vec![Span::styled("Posts", styling::active_block_title_style())];
    if let Some(error) = state.get_fetch_error() {
        title.push(Span::styled(
            format!(" {} ", refresh_error_text(error)),
            styling::error_text_style(&theme),
        ));
    }
    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(&theme));

    if state.get_view().page.is_empty() {
        let (message, style) = if state.is_loading() {
            (
                format!("{} Loading posts...", spinner::frame(*state.get_spinner_index())),
                styling::muted_text_style(&theme),
            )
        } else if let Some(error) = state.get_fetch_error() {
            (refresh_error_text(error), styling::error_text_style(&theme))
        } else if state.get_view().summary.filtered_count == 0 {
            ("No posts found.".to_string(), styling::muted_text_style(&theme))
        } else {
            (
                "Nothing on this page. Press h to go back.".to_string(),
                styling::muted_text_style(&theme),
            )
        };
        let paragraph = Paragraph::new(Span::styled(message, style))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, size);
        return;
    }

    let sort_field = state.get_list().sort_field();
    let header_cell = |label: &'static str, field: SortField| {
        let sorted = sort_field == Some(field);
        let text = if sorted {
            format!("{} ▲", label)
        } else {
            label.to_string()
        };
        Cell::from(text).style(styling::header_style(&theme, sorted))
    };
    let header = Row::new(vec![
        Cell::from("ID").style(styling::header_style(&theme, false)),
        header_cell("Title [t]", SortField::Title),
        header_cell("Body [b]", SortField::Body),
    ])
    .bottom_margin(1);

    // Border, highlight symbol, ID column and spacing
    let text_width = (size.width as usize).saturating_sub(12);
    let title_width = text_width * 4 / 10;
    let body_width = text_width - title_width;
    let rows: Vec<Row> = state
        .get_view()
        .page
        .iter()
        .map(|post| {
            Row::new(vec![
                Cell::from(post.id.to_string()),
                Cell::from(truncate(&single_line(&post.title), title_width)),
                Cell::from(truncate(&single_line(&post.body), body_width)),
            ])
            .style(styling::normal_text_style(&theme))
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Percentage(40),
        Constraint::Percentage(60),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(styling::selected_row_style(&theme))
        .highlight_symbol("> ");

    frame.render_stateful_widget(table, size, state.get_table_state());
}

fn refresh_error_text(error: &str) -> String {
    format!("Failed to load posts: {} (press r to retry)", single_line(error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Post, PostId};
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_text(state: &mut State) -> String {
        let backend = TestBackend::new(120, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                table(frame, area, state)
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn failed_refresh_keeps_rows_and_shows_error() {
        let mut state = State::default();
        state.set_posts(vec![Post {
            id: PostId::Int(1),
            title: "kept title".to_string(),
            body: "kept body".to_string(),
            user_id: None,
        }]);
        state.set_fetch_error("status 500".to_string());

        let text = rendered_text(&mut state);
        assert!(text.contains("kept title"));
        assert!(text.contains("Failed to load posts: status 500"));
    }

    #[test]
    fn error_without_rows_fills_table() {
        let mut state = State::default();
        state.set_fetch_error("timeout".to_string());
        let text = rendered_text(&mut state);
        assert!(text.contains("Failed to load posts: timeout"));
    }
}
