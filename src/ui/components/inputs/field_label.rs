use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Field title: the label, a red `*` when required, and an optional
/// status marker (loading, warning) at the end.
pub fn field_label<'a>(label: &str, required: bool, focused: bool, marker: Option<(&'a str, Color)>) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![Span::raw(" "), Span::styled(label.to_string(), label_style)];
    if required {
        spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    if let Some((marker, color)) = marker {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(marker, Style::default().fg(color)));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

/// Validation message line under a field
pub fn error_line(message: Option<&str>) -> Line<'static> {
    match message {
        Some(message) => Line::from(Span::styled(format!(" {}", message), Style::default().fg(Color::Red))),
        None => Line::default(),
    }
}
