//! View controller: owns the table, the open dialog and the API handle.
//!
//! Every mutation follows the same path: call the API, then `refresh`,
//! which refetches and rebuilds the whole table.

use movie_core::{ApiOutcome, MovieApi, Transport};
use ratatui::crossterm::event::KeyCode;
use ratatui::Frame;
use tracing::{info, warn};

use crate::form::{Field, MovieForm};
use crate::table::MovieTable;
use crate::ui;

/// The dialog currently drawn over the table, if any.
#[derive(Debug, Clone)]
pub enum Modal {
    Add(MovieForm),
    Edit { id: i64, form: MovieForm },
    /// Single-cell edit, sent as a partial update.
    Inline { id: i64, field: Field, value: String },
    /// Genre filter prompt; an empty value clears the filter.
    Filter(String),
}

pub struct App<T> {
    api: MovieApi<T>,
    table: MovieTable,
    modal: Option<Modal>,
    genre_filter: Option<String>,
    status: Option<String>,
}

impl<T: Transport> App<T> {
    pub fn new(api: MovieApi<T>, genre_filter: Option<String>) -> Self {
        Self {
            api,
            table: MovieTable::default(),
            modal: None,
            genre_filter: genre_filter.filter(|genre| !genre.trim().is_empty()),
            status: None,
        }
    }

    pub fn table(&self) -> &MovieTable {
        &self.table
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn genre_filter(&self) -> Option<&str> {
        self.genre_filter.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn draw(&self, frame: &mut Frame) {
        ui::draw(frame, self);
    }

    /// Refetch and rebuild every row. On failure the previous rows stay.
    pub fn refresh(&mut self) {
        let outcome = match &self.genre_filter {
            Some(genre) => self.api.get_genre(genre),
            None => self.api.get_all_movies(),
        };
        match outcome.into_result() {
            Ok(movies) => {
                info!(count = movies.len(), "rebuilding movie table");
                self.table.rebuild(movies);
            }
            Err(error) => self.status = Some(format!("Could not load movies: {error}")),
        }
    }

    pub fn open_add(&mut self) {
        self.modal = Some(Modal::Add(MovieForm::default()));
    }

    pub fn open_edit(&mut self) {
        if let Some(row) = self.table.current() {
            self.modal = Some(Modal::Edit {
                id: row.movie.id,
                form: MovieForm::from_movie(&row.movie),
            });
        }
    }

    pub fn open_inline(&mut self, field: Field) {
        if let Some(row) = self.table.current() {
            self.modal = Some(Modal::Inline {
                id: row.movie.id,
                field,
                value: field.value_of(&row.movie),
            });
        }
    }

    pub fn open_filter(&mut self) {
        let current = self.genre_filter.clone().unwrap_or_default();
        self.modal = Some(Modal::Filter(current));
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Submit the open dialog. Validation failures keep it open; anything
    /// that reaches the server closes it and triggers a full re-render.
    pub fn submit(&mut self) {
        let Some(modal) = self.modal.take() else {
            return;
        };
        match modal {
            Modal::Add(mut form) => match form.parse_inputs() {
                Ok(input) => {
                    let outcome = self.api.create_movie(&input);
                    self.report(outcome, |movie| format!("Created \"{}\".", movie.title));
                    self.refresh();
                }
                Err(error) => {
                    form.error = Some(error.to_string());
                    self.modal = Some(Modal::Add(form));
                }
            },
            Modal::Edit { id, mut form } => match form.parse_inputs() {
                Ok(input) => {
                    let outcome = self.api.update_movie(&input.with_id(id));
                    self.report(outcome, |movie| format!("Updated \"{}\".", movie.title));
                    self.refresh();
                }
                Err(error) => {
                    form.error = Some(error.to_string());
                    self.modal = Some(Modal::Edit { id, form });
                }
            },
            Modal::Inline { id, field, value } => match field.to_fields(&value) {
                Ok(fields) => {
                    let outcome = self.api.update_movie_details(&fields, id);
                    self.report(outcome, |_| {
                        format!("Updated {} of movie {id}.", field.label().to_lowercase())
                    });
                    self.refresh();
                }
                Err(error) => {
                    self.status = Some(error.to_string());
                    self.modal = Some(Modal::Inline { id, field, value });
                }
            },
            Modal::Filter(value) => {
                let genre = value.trim();
                self.genre_filter = (!genre.is_empty()).then(|| genre.to_string());
                self.status = None;
                self.table.select_first();
                self.refresh();
            }
        }
    }

    /// Delete every checked row, or the cursor row when nothing is checked.
    pub fn delete(&mut self) {
        let mut ids = self.table.checked_ids();
        if ids.is_empty() {
            match self.table.current() {
                Some(row) => ids.push(row.movie.id),
                None => return,
            }
        }

        let mut failed = 0;
        for id in &ids {
            if let Some(error) = self.api.delete_movie(*id).error {
                warn!(id, %error, "delete failed");
                failed += 1;
            }
        }
        self.status = Some(match failed {
            0 => format!("Deleted {} movie(s).", ids.len()),
            n => format!("{n} of {} delete(s) failed.", ids.len()),
        });
        self.refresh();
    }

    pub fn toggle_checked(&mut self) {
        self.table.toggle_current();
    }

    fn report<R>(&mut self, outcome: ApiOutcome<R>, success: impl FnOnce(&R) -> String) {
        self.status = Some(match (&outcome.data, &outcome.error) {
            (_, Some(error)) => format!("Request failed: {error}"),
            (Some(data), None) => success(data),
            (None, None) => String::new(),
        });
    }

    /// Handle one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.modal.is_some() {
            self.handle_modal_key(code);
            return false;
        }
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('a') => self.open_add(),
            KeyCode::Char('e') | KeyCode::Enter => self.open_edit(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete(),
            KeyCode::Char(' ') => self.toggle_checked(),
            KeyCode::Char('t') => self.open_inline(Field::Title),
            KeyCode::Char('g') => self.open_inline(Field::Genre),
            KeyCode::Char('y') => self.open_inline(Field::Year),
            KeyCode::Char('f') => self.open_filter(),
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Down | KeyCode::Char('j') => self.table.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.table.move_selection(-1),
            KeyCode::Home => self.table.select_first(),
            KeyCode::End => self.table.select_last(),
            _ => {}
        }
        false
    }

    fn handle_modal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => return self.close_modal(),
            KeyCode::Enter => return self.submit(),
            _ => {}
        }
        let Some(modal) = self.modal.as_mut() else {
            return;
        };
        match modal {
            Modal::Add(form) | Modal::Edit { form, .. } => match code {
                KeyCode::Tab | KeyCode::Down => form.next_field(),
                KeyCode::BackTab | KeyCode::Up => form.prev_field(),
                KeyCode::Backspace => form.backspace(),
                KeyCode::Char(ch) => {
                    if form.push_char(ch) {
                        form.error = None;
                    }
                }
                _ => {}
            },
            Modal::Inline { field, value, .. } => match code {
                KeyCode::Backspace => {
                    value.pop();
                }
                KeyCode::Char(ch) if field.accepts(ch) => value.push(ch),
                _ => {}
            },
            Modal::Filter(value) => match code {
                KeyCode::Backspace => {
                    value.pop();
                }
                KeyCode::Char(ch) if !ch.is_control() => value.push(ch),
                _ => {}
            },
        }
    }
}
