use crate::data::adapter::PlayerTableModel;
use crate::data::filter::{search_players, SearchError};
use crate::data::model::PlayerTable;

// ---------------------------------------------------------------------------
// Search triggers, outcomes and notices
// ---------------------------------------------------------------------------

/// What started a search. Every trigger runs the same search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTrigger {
    Button,
    /// Return or keypad Enter.
    ConfirmKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Number of matched rows now bound to the grid.
    Found(usize),
    NoMatch,
}

/// A blocking message shown over the search view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    InputError,
    NoResults { query: String },
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::InputError => "Input Error",
            Notice::NoResults { .. } => "No Results",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::InputError => SearchError::EmptyQuery.to_string(),
            Notice::NoResults { query } => format!("No data found for player: {query}"),
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Notice::InputError)
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Player table loaded at startup; never modified.
    pub table: PlayerTable,

    /// Contents of the name field.
    pub query: String,

    /// Grid binding: `Some` while showing a result, `None` when empty.
    pub results: Option<PlayerTableModel>,

    /// Bumped on every new binding so the grid re-fits its columns.
    pub results_generation: u64,

    /// Open notice, if any.
    pub notice: Option<Notice>,

    /// Move keyboard focus to the name field on the next frame.
    pub focus_query: bool,
}

impl AppState {
    pub fn new(table: PlayerTable) -> Self {
        Self {
            table,
            query: String::new(),
            results: None,
            results_generation: 0,
            notice: None,
            focus_query: true,
        }
    }

    /// Run a search and update the grid binding.
    ///
    /// A blank query leaves the binding untouched. No match empties it.
    pub fn search(&mut self, query: &str) -> Result<SearchOutcome, SearchError> {
        let matches = search_players(&self.table, query)?;
        if matches.is_empty() {
            self.results = None;
            return Ok(SearchOutcome::NoMatch);
        }

        let found = matches.len();
        self.results = Some(PlayerTableModel::new(matches));
        self.results_generation += 1;
        Ok(SearchOutcome::Found(found))
    }

    /// Search for the current contents of the name field and raise the
    /// matching notice.
    pub fn submit_search(&mut self, trigger: SearchTrigger) {
        let query = self.query.trim().to_string();
        match self.search(&query) {
            Ok(SearchOutcome::Found(n)) => {
                log::debug!("{trigger:?}: {n} row(s) for {query:?}");
            }
            Ok(SearchOutcome::NoMatch) => {
                log::debug!("{trigger:?}: no rows for {query:?}");
                self.notice = Some(Notice::NoResults { query });
            }
            Err(SearchError::EmptyQuery) => {
                log::debug!("{trigger:?}: empty query");
                self.notice = Some(Notice::InputError);
            }
        }
        // Enter takes focus away from a single-line field.
        if trigger == SearchTrigger::ConfirmKey {
            self.focus_query = true;
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.focus_query = true;
    }
}
