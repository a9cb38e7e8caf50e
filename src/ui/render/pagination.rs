use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the counts and page controls below the table.
///
pub fn pagination(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let summary = state.get_view().summary;
    let navigation = state.get_navigation();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    let active = Paragraph::new(Line::from(vec![
        Span::styled("active posts ", styling::muted_text_style(theme)),
        Span::styled(
            format!("{}/{}", summary.filtered_count, summary.total_count),
            styling::count_style(theme),
        ),
    ]));
    frame.render_widget(active, columns[0]);

    let control_style = |enabled: bool| {
        if enabled {
            styling::active_block_border_style(theme)
        } else {
            styling::muted_text_style(theme)
        }
    };
    let controls = Paragraph::new(Line::from(vec![
        Span::styled("Rows per page ", styling::muted_text_style(theme)),
        Span::styled(
            format!("{} [p]", state.get_list().page_size()),
            styling::normal_text_style(theme),
        ),
        Span::raw("   "),
        Span::styled(
            format!(
                "{}-{} of {}",
                summary.range_start, summary.range_end, summary.filtered_count
            ),
            styling::normal_text_style(theme),
        ),
        Span::raw("   "),
        Span::styled("◀ ", control_style(navigation.previous_enabled)),
        Span::styled("▶", control_style(navigation.next_enabled)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(controls, columns[1]);
}
