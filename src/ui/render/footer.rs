use super::Frame;
use crate::state::{Mode, State};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the key hints for the current mode.
///
fn controls_text(mode: Mode) -> &'static str {
    match mode {
        Mode::Search => " Type to search, Backspace: delete, Enter/Esc: done",
        Mode::PageSizeMenu => " j/k: choose, Enter: apply, Esc: cancel",
        Mode::Normal => {
            " /: search, j/k: rows, h/l: pages, t/b: sort, p: rows per page, e: edit, d: delete, v: view, y: copy, r: reload, g: log, q: quit"
        }
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let mode = state.current_mode();
    let (label, background) = match mode {
        Mode::Search => ("SEARCH:", theme.footer_search),
        Mode::PageSizeMenu => ("ROWS:", theme.footer_menu),
        Mode::Normal => ("POSTS:", theme.footer_normal),
    };

    let line = Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(theme.text.to_color())
                .bg(background.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            controls_text(mode),
            Style::default().fg(theme.warning.to_color()),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), size);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_text_per_mode() {
        assert!(controls_text(Mode::Search).contains("Type to search"));
        assert!(controls_text(Mode::PageSizeMenu).contains("apply"));
        assert!(controls_text(Mode::Normal).contains("d: delete"));
    }
}
