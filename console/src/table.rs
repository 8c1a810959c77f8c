use movie_core::Movie;

/// One rendered movie plus its checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRow {
    pub movie: Movie,
    pub checked: bool,
}

/// Transient view of the last fetch. The server owns the data; this only
/// remembers what was drawn and where the cursor is.
#[derive(Debug, Default)]
pub struct MovieTable {
    rows: Vec<MovieRow>,
    selected: usize,
}

impl MovieTable {
    /// Drop every row and build fresh ones from `movies`. Checkbox state is
    /// not carried over.
    pub fn rebuild(&mut self, movies: Vec<Movie>) {
        self.rows.clear();
        self.rows.extend(movies.into_iter().map(|movie| MovieRow {
            movie,
            checked: false,
        }));
        self.ensure_in_bounds();
    }

    pub fn rows(&self) -> &[MovieRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn current(&self) -> Option<&MovieRow> {
        self.rows.get(self.selected)
    }

    pub fn move_selection(&mut self, offset: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() as isize - 1;
        self.selected = (self.selected as isize + offset).clamp(0, last) as usize;
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    /// Flip the checkbox of the cursor row, returning its new state.
    pub fn toggle_current(&mut self) -> Option<bool> {
        let row = self.rows.get_mut(self.selected)?;
        row.checked = !row.checked;
        Some(row.checked)
    }

    pub fn checked_ids(&self) -> Vec<i64> {
        self.rows
            .iter()
            .filter(|row| row.checked)
            .map(|row| row.movie.id)
            .collect()
    }

    fn ensure_in_bounds(&mut self) {
        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
    }
}
