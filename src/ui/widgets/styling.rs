use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for the selected table row.
///
pub fn selected_row_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.highlight_fg.to_color())
        .bg(theme.highlight_bg.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for table headers, underlined when the column is sorted.
///
pub fn header_style(theme: &Theme, sorted: bool) -> Style {
    let style = Style::default()
        .fg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD);
    if sorted {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for the typed search term.
///
pub fn search_term_style(theme: &Theme) -> Style {
    Style::default().fg(theme.accent.to_color())
}

/// Return the style for the active post count.
///
pub fn count_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.success.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for secondary text and disabled controls.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for error messages.
///
pub fn error_text_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.error.to_color())
        .add_modifier(Modifier::BOLD)
}
