use super::state::{AppState, Dialog, Focus};
use super::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, HighlightSpacing, List, ListItem, Paragraph, Wrap},
};

const LABEL_WIDTH: u16 = 24;

const FIELDS: [(Focus, &str); 4] = [
    (Focus::Type, "Type (income/expense):"),
    (Focus::Category, "Category:"),
    (Focus::Amount, "Amount:"),
    (Focus::Date, "Date (DD-MM-YYYY):"),
];

pub fn draw(frame: &mut Frame<'_>, state: &mut AppState) {
    let theme = Theme::default();
    let area = frame.area();

    let window = Block::default()
        .title(" Budget Calculator ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .style(Style::default().bg(theme.background).fg(theme.text));
    let inner = window.inner(area);
    frame.render_widget(window, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    render_form(frame, layout[0], state, &theme);
    render_list(frame, layout[1], state, &theme);
    render_actions(frame, layout[2], state, &theme);
    render_hints(frame, layout[3], state, &theme);

    match state.dialog {
        Some(Dialog::Error(err)) => {
            render_dialog(frame, area, "Error", vec![Line::from(err.to_string())], "OK", &theme)
        }
        Some(Dialog::Summary(summary)) => {
            let lines = summary.lines().into_iter().map(Line::from).collect();
            render_dialog(frame, area, "Summary", lines, "Close", &theme)
        }
        None => {}
    }
}

fn render_form(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    for (row, (focus, label)) in FIELDS.iter().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(10)])
            .split(rows[row]);

        let focused = state.focus == *focus;
        frame.render_widget(Paragraph::new(format!(" {}", label)), columns[0]);

        let text = state.field(*focus).unwrap_or_default();
        let style = if focused {
            Style::default().bg(theme.dialog).fg(theme.focus).bold()
        } else {
            Style::default().bg(theme.list).fg(theme.text)
        };
        frame.render_widget(Paragraph::new(text).style(style), columns[1]);

        if focused && state.dialog.is_none() {
            let offset = Span::raw(text).width() as u16;
            let x = (columns[1].x + offset).min(columns[1].right().saturating_sub(1));
            frame.set_cursor_position(Position::new(x, columns[1].y));
        }
    }

    let button_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(10)])
        .split(rows[4]);
    frame.render_widget(
        button("Add Transaction", state.focus == Focus::AddButton, theme),
        button_row[1],
    );
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &mut AppState, theme: &Theme) {
    let border_style = if state.focus == Focus::List {
        Style::default().fg(theme.focus).bold()
    } else {
        Style::default().fg(theme.dim)
    };
    let block = Block::default()
        .title("Transactions:")
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(theme.list).fg(theme.text));

    // Leave room for the borders.
    state.last_page_size = area.height.saturating_sub(2).max(1) as usize;

    if state.store.is_empty() {
        let empty = Paragraph::new("No transactions recorded yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.dim))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state.store.lines().into_iter().map(ListItem::new).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(theme.focus).fg(theme.dialog).bold())
        .highlight_symbol("➤ ")
        .highlight_spacing(HighlightSpacing::WhenSelected);

    frame.render_stateful_widget(list, area, &mut state.list_state);
}

fn render_actions(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    frame.render_widget(
        button("Delete Transaction", state.focus == Focus::DeleteButton, theme)
            .alignment(Alignment::Center),
        columns[0],
    );
    frame.render_widget(
        button("View Summary", state.focus == Focus::SummaryButton, theme)
            .alignment(Alignment::Center),
        columns[1],
    );
}

fn render_hints(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let hint = match (state.dialog.is_some(), state.focus) {
        (true, _) => "Enter/Esc close",
        (false, Focus::List) => {
            "↑/↓ select  Space clear  Del delete  Tab next  ^S summary  Esc quit"
        }
        (false, focus) if focus.is_field() => {
            "Type to edit  Enter add  Tab/↓ next  ^D delete  ^S summary  Esc quit"
        }
        (false, _) => "Enter press  Tab next  Shift+Tab back  ^D delete  ^S summary  Esc quit",
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(theme.dim)),
        area,
    );
}

fn button<'a>(label: &'a str, focused: bool, theme: &Theme) -> Paragraph<'a> {
    let style = if focused {
        Style::default().bg(theme.focus).fg(theme.dialog).bold()
    } else {
        Style::default().fg(theme.text)
    };
    Paragraph::new(Line::from(Span::styled(format!("[ {} ]", label), style)))
}

fn render_dialog(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    mut lines: Vec<Line<'_>>,
    action: &str,
    theme: &Theme,
) {
    let popup_area = centered_rect(70, 40, area);
    frame.render_widget(Clear, popup_area);

    let style = if title == "Error" {
        Style::default().bg(theme.dialog).fg(theme.error)
    } else {
        Style::default().bg(theme.dialog).fg(theme.text)
    };

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", action),
        Style::default().bg(theme.focus).fg(theme.dialog).bold(),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .style(style);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true }),
        popup_area,
    );
}

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
