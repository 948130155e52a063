use crate::app::{App, Field};
use folio_contact::Severity;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the development environment banner
pub fn render_dev_banner(f: &mut Frame, area: Rect) {
    let banner = Line::from(Span::styled(
        "DEVELOPMENT ENVIRONMENT - Testing Backend Integration",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Rgb(255, 107, 53))
            .add_modifier(Modifier::BOLD),
    ));

    f.render_widget(Paragraph::new(banner).centered(), area);
}

/// Render the contact form: three fields and the submit control
pub fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Get In Touch",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (field, value) in [
        (Field::Name, &app.name),
        (Field::Email, &app.email),
        (Field::Message, &app.message),
    ] {
        lines.push(field_label(app, field));
        lines.extend(field_lines(app, field, value));
        lines.push(Line::from(""));
    }

    lines.push(submit_line(app));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn field_label(app: &App, field: Field) -> Line<'static> {
    let focused = app.focus == field;
    let (prefix, style) = if focused {
        ("→ ", Style::default().fg(Color::Cyan))
    } else {
        ("  ", Style::default().fg(Color::DarkGray))
    };

    Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(field.label(), style.add_modifier(Modifier::BOLD)),
    ])
}

/// Field value, one line per text line, with a cursor marker when focused
fn field_lines<'a>(app: &App, field: Field, value: &'a str) -> Vec<Line<'a>> {
    let style = if app.locked {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };

    if app.focus == field && !app.locked {
        let byte_pos = crate::app::char_to_byte_index(value, app.input_cursor);
        let with_cursor = format!("{}_{}", &value[..byte_pos], &value[byte_pos..]);
        return with_cursor
            .split('\n')
            .map(|l| Line::from(vec![Span::raw("  > "), Span::styled(l.to_string(), style)]))
            .collect();
    }

    value
        .split('\n')
        .map(|l| Line::from(vec![Span::raw("  > "), Span::styled(l, style)]))
        .collect()
}

fn submit_line(app: &App) -> Line<'static> {
    let style = if app.locked {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
    } else if app.focus == Field::Submit {
        Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };

    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("[ {} ]", app.submit_label), style),
    ])
}

/// Render the visible notification, if any
pub fn render_notification(f: &mut Frame, app: &App, area: Rect) {
    let Some(notification) = app.notifications.current() else {
        return;
    };

    let color = match notification.severity {
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
        Severity::Info => Color::Cyan,
    };

    let line = Line::from(vec![
        Span::styled(
            format!("[{}] ", notification.severity.as_str()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(&notification.text, Style::default().fg(Color::White).bg(color)),
        Span::styled("  ×", Style::default().fg(Color::DarkGray)),
    ]);

    f.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

/// Render hints bar (no borders, minimal)
pub fn render_hints(f: &mut Frame, app: &App, area: Rect) {
    let newline_key = if app.keyboard_enhancements_supported {
        "Shift+Enter"
    } else {
        "Ctrl+J"
    };

    let hint = |s: &'static str| Span::styled(s, Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(vec![
            hint("Tab"),
            hint(" next field  "),
            hint("Enter"),
            hint(" send  "),
            Span::styled(newline_key, Style::default().fg(Color::DarkGray)),
            hint(" newline  "),
            hint("Esc"),
            hint(" close notice  "),
            hint("Ctrl+Q"),
            hint(" quit"),
        ]),
        Line::from(Span::styled(
            format!("{} │ {}", app.config.environment, app.config.contact_api_url),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    f.render_widget(Paragraph::new(lines), area);
}
