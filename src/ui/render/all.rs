use super::*;
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

/// Height of the log panel when shown.
///
const LOG_HEIGHT: u16 = 10;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let area = frame.size();
    let mut constraints = vec![
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(3),
    ];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(1));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    search(frame, rows[0], state);
    table(frame, rows[1], state);
    pagination(frame, rows[2], state);
    if state.is_log_visible() {
        log(frame, rows[3], state);
    }
    footer(frame, rows[rows.len() - 1], state);
    popup(frame, area, state);
}
