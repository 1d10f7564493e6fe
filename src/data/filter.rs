use thiserror::Error;

use super::model::{PlayerTable, PLAYER_NAME_COLUMN};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Please enter a player name.")]
    EmptyQuery,
}

/// Trim the raw query; a blank query is rejected.
pub fn normalize_query(query: &str) -> Result<&str, SearchError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(SearchError::EmptyQuery)
    } else {
        Ok(trimmed)
    }
}

/// Indices of rows whose player name equals `name`, ignoring case.
///
/// Exact equality only: no substring or fuzzy matching. Null names never
/// match.
pub fn matching_indices(table: &PlayerTable, name: &str) -> Vec<usize> {
    let Some(col) = table.column_index(PLAYER_NAME_COLUMN) else {
        return Vec::new();
    };
    let needle = name.to_lowercase();

    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            let cell = &row[col];
            if cell.is_null() {
                return false;
            }
            match cell.as_text() {
                Some(s) => s.to_lowercase() == needle,
                None => cell.to_string().to_lowercase() == needle,
            }
        })
        .map(|(i, _)| i)
        .collect()
}

/// Rows matching `query` as a new table with the same columns. The result
/// may be empty.
pub fn search_players(table: &PlayerTable, query: &str) -> Result<PlayerTable, SearchError> {
    let name = normalize_query(query)?;
    Ok(table.select_rows(&matching_indices(table, name)))
}
