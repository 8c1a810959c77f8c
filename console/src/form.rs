use anyhow::{anyhow, Context, Result};
use movie_core::{Movie, MovieFields, MovieInput};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Editable columns of a movie.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Title,
    Genre,
    Year,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Genre, Field::Year];

    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Genre => "Genre",
            Field::Year => "Year",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Field::Title => Field::Genre,
            Field::Genre => Field::Year,
            Field::Year => Field::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Title => Field::Year,
            Field::Genre => Field::Title,
            Field::Year => Field::Genre,
        }
    }

    /// Whether `ch` may be typed into this field.
    pub fn accepts(self, ch: char) -> bool {
        match self {
            Field::Year => ch.is_ascii_digit(),
            Field::Title | Field::Genre => !ch.is_control(),
        }
    }

    pub fn value_of(self, movie: &Movie) -> String {
        match self {
            Field::Title => movie.title.clone(),
            Field::Genre => movie.genre.clone(),
            Field::Year => movie.year_release.to_string(),
        }
    }

    /// Turn a single typed value into a partial update for this field.
    pub fn to_fields(self, raw: &str) -> Result<MovieFields> {
        let mut fields = MovieFields::default();
        match self {
            Field::Title => fields.title = Some(required(raw, "Title")?),
            Field::Genre => fields.genre = Some(required(raw, "Genre")?),
            Field::Year => fields.year_release = Some(parse_year(raw)?),
        }
        Ok(fields)
    }
}

/// State of the add/edit movie dialog.
#[derive(Debug, Default, Clone)]
pub struct MovieForm {
    pub title: String,
    pub genre: String,
    pub year: String,
    pub active: Field,
    pub error: Option<String>,
}

impl MovieForm {
    /// Pre-fill the form from an existing row when editing.
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            year: movie.year_release.to_string(),
            active: Field::Title,
            error: None,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Genre => &self.genre,
            Field::Year => &self.year,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Title => &mut self.title,
            Field::Genre => &mut self.genre,
            Field::Year => &mut self.year,
        }
    }

    pub fn next_field(&mut self) {
        self.active = self.active.next();
    }

    pub fn prev_field(&mut self) {
        self.active = self.active.prev();
    }

    /// Append a character to the active field, rejecting what it cannot hold.
    pub fn push_char(&mut self, ch: char) -> bool {
        if !self.active.accepts(ch) {
            return false;
        }
        let field = self.active;
        self.value_mut(field).push(ch);
        true
    }

    pub fn backspace(&mut self) {
        let field = self.active;
        self.value_mut(field).pop();
    }

    /// Validate the inputs and return a payload ready to send.
    pub fn parse_inputs(&self) -> Result<MovieInput> {
        Ok(MovieInput {
            title: required(&self.title, "Title")?,
            genre: required(&self.genre, "Genre")?,
            year_release: parse_year(&self.year)?,
        })
    }

    /// Render a single line for the form widget.
    pub fn build_line(&self, field: Field) -> Line<'static> {
        let value = self.value(field);
        let is_active = self.active == field;

        let display = if value.is_empty() {
            "<required>".to_string()
        } else {
            value.to_string()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{}: ", field.label())),
            Span::styled(display, style),
        ])
    }
}

fn required(raw: &str, label: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("{label} is required."));
    }
    Ok(trimmed.to_string())
}

fn parse_year(raw: &str) -> Result<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("Year is required."));
    }
    trimmed
        .parse::<i32>()
        .context("Year must be a whole number.")
}
