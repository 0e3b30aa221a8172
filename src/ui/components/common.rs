use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates the rounded block every story is framed in
pub fn create_story_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(Color::DarkGray))
}

/// Border block of an input field. Focus wins over the error color.
pub fn create_field_block<'a>(title: Line<'a>, focused: bool, has_error: bool) -> Block<'a> {
    let border_color = if focused {
        Color::Cyan
    } else if has_error {
        Color::Red
    } else {
        Color::DarkGray
    };

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .border_style(Style::default().fg(border_color))
}

/// Input text with a visual cursor when focused
pub fn create_input_paragraph<'a>(input_buffer: &str, cursor: usize, focused: bool, block: Block<'a>) -> Paragraph<'a> {
    let line = if focused {
        let before: String = input_buffer.chars().take(cursor).collect();
        let after: String = input_buffer.chars().skip(cursor).collect();
        Line::from(vec![
            Span::raw(before),
            Span::styled("█", Style::default().fg(Color::Cyan)),
            Span::raw(after),
        ])
    } else {
        Line::from(input_buffer.to_string())
    };

    Paragraph::new(line).block(block).style(Style::default().fg(Color::White))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Rectangle of the given percentage size centered in `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1])[1]
}

/// Common instruction shortcuts used across stories
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const TAB_FOCUS: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const ENTER_SELECT: InstructionShortcut = ("Enter", Color::Green, " Select");
    pub const CTRL_S_SUBMIT: InstructionShortcut = ("Ctrl+S", Color::Green, " Submit");
    pub const PAGE_DOWN_NEXT: InstructionShortcut = ("PgDn", Color::Green, " Next");
    pub const PAGE_UP_BACK: InstructionShortcut = ("PgUp", Color::Yellow, " Back");
    pub const F_KEYS_JUMP: InstructionShortcut = ("F1-F9", Color::Cyan, " Jump to step");
    pub const CTRL_A_ADD: InstructionShortcut = ("Ctrl+A", Color::Cyan, " Add row");
    pub const CTRL_D_REMOVE: InstructionShortcut = ("Ctrl+D", Color::Red, " Remove row");
    pub const ARROWS_MOVE: InstructionShortcut = ("←/→", Color::Cyan, " Move");
    pub const SPACE_TOGGLE: InstructionShortcut = ("Space", Color::Green, " Toggle");
}
