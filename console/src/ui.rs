use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use movie_core::Transport;

use crate::app::{App, Modal};
use crate::form::{Field, MovieForm};
use crate::table::MovieRow;

const HELP: &str =
    "a add • e edit • d delete • space check • t/g/y edit cell • f filter • r reload • q quit";

pub(crate) fn draw<T: Transport>(frame: &mut Frame, app: &App<T>) {
    let [main, footer] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

    draw_table(frame, main, app);

    let footer_line = match app.status() {
        Some(status) => Line::from(Span::styled(
            status.to_string(),
            Style::default().fg(Color::Cyan),
        )),
        None => Line::from(Span::styled(HELP, Style::default().fg(Color::Gray))),
    };
    frame.render_widget(Paragraph::new(footer_line), footer);

    match app.modal() {
        Some(Modal::Add(form)) => draw_movie_form(frame, main, "Add movie", form),
        Some(Modal::Edit { id, form }) => {
            draw_movie_form(frame, main, &format!("Edit movie #{id}"), form)
        }
        Some(Modal::Inline { id, field, value }) => draw_prompt(
            frame,
            main,
            &format!("Edit {} of movie #{id}", field.label().to_lowercase()),
            field.label(),
            value,
        ),
        Some(Modal::Filter(value)) => {
            draw_prompt(frame, main, "Filter by genre", "Genre", value)
        }
        None => {}
    }
}

fn draw_table<T: Transport>(frame: &mut Frame, area: Rect, app: &App<T>) {
    let title = match app.genre_filter() {
        Some(genre) => format!("Movies ({genre})"),
        None => "Movies".to_string(),
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    let table = app.table();
    if table.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No movies. Press a to add one.",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(["", "ID", "Title", "Genre", "Year", ""])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = table.rows().iter().map(movie_row).collect();
    let widths = [
        Constraint::Length(3),
        Constraint::Length(6),
        Constraint::Percentage(40),
        Constraint::Percentage(25),
        Constraint::Length(6),
        Constraint::Length(15),
    ];

    let widget = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = TableState::default().with_selected(Some(table.selected()));
    frame.render_stateful_widget(widget, area, &mut state);
}

fn movie_row(row: &MovieRow) -> Row<'static> {
    let checkbox = if row.checked { "[x]" } else { "[ ]" };
    Row::new(vec![
        Cell::from(checkbox),
        Cell::from(row.movie.id.to_string()),
        Cell::from(row.movie.title.clone()),
        Cell::from(row.movie.genre.clone()),
        Cell::from(row.movie.year_release.to_string()),
        Cell::from(Span::styled("[edit] [delete]", Style::default().fg(Color::DarkGray))),
    ])
}

/// Render the add/edit dialog centered over the table, with validation
/// feedback below the fields.
fn draw_movie_form(frame: &mut Frame, area: Rect, title: &str, form: &MovieForm) {
    let popup_area = centered_rect(60, 40, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default().title(title.to_string()).borders(Borders::ALL);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines: Vec<Line> = Field::ALL.iter().map(|field| form.build_line(*field)).collect();
    lines.push(Line::from(""));
    match &form.error {
        Some(error) => lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ))),
        None => lines.push(Line::from(Span::styled(
            "Enter to save • Tab to switch • Esc to cancel",
            Style::default().fg(Color::Gray),
        ))),
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);

    let row = Field::ALL
        .iter()
        .position(|field| *field == form.active)
        .unwrap_or(0) as u16;
    let prefix = format!("{}: ", form.active.label()).len() as u16;
    let value_len = form.value(form.active).chars().count() as u16;
    frame.set_cursor_position((inner.x + prefix + value_len, inner.y + row));
}

fn draw_prompt(frame: &mut Frame, area: Rect, title: &str, label: &str, value: &str) {
    let popup_area = centered_rect(60, 30, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default().title(title.to_string()).borders(Borders::ALL);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let lines = vec![
        Line::from(vec![
            Span::raw(format!("{label}: ")),
            Span::styled(value.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter to apply • Esc to cancel",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    let prefix = format!("{label}: ").len() as u16;
    frame.set_cursor_position((inner.x + prefix + value.chars().count() as u16, inner.y));
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}
