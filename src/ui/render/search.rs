use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the search box.
///
pub fn search(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let term = state.get_list().search_term();

    let border_style = if state.is_search_mode() {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let block = Block::default()
        .title(Span::styled("Search", styling::active_block_title_style()))
        .borders(Borders::ALL)
        .border_style(border_style);

    let line = if term.is_empty() && !state.is_search_mode() {
        Line::from(Span::styled(
            "Search posts (press /)",
            styling::muted_text_style(theme),
        ))
    } else {
        let mut spans = vec![Span::styled(
            term.to_string(),
            styling::search_term_style(theme),
        )];
        if state.is_search_mode() {
            spans.push(Span::styled("▏", styling::active_block_border_style(theme)));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line).block(block), size);
}
