use std::fmt;

/// Column holding the player's name; the search key.
pub const PLAYER_NAME_COLUMN: &str = "Player Name";

/// Column coerced to non-negative integers after load.
pub const YEAR_COLUMN: &str = "Year";

// ---------------------------------------------------------------------------
// CellValue – a single cell of the player table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring the dtypes a dataframe would infer
/// from a CSV column.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            // Debug keeps the trailing `.0` on whole numbers.
            CellValue::Float(v) => write!(f, "{v:?}"),
            CellValue::Null => write!(f, "nan"),
        }
    }
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// PlayerTable – the loaded dataset (or a filtered snapshot of it)
// ---------------------------------------------------------------------------

/// Ordered rows sharing one header list. Every row has exactly
/// `column_names.len()` cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerTable {
    pub column_names: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl PlayerTable {
    pub fn new(column_names: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == column_names.len()));
        Self { column_names, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    /// Position of a column by exact (case-sensitive) name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|c| c == name)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row)?.get(col)
    }

    /// Copy the given rows, in the given order, into a new table with the
    /// same columns.
    pub fn select_rows(&self, indices: &[usize]) -> PlayerTable {
        let rows = indices
            .iter()
            .filter_map(|&i| self.rows.get(i).cloned())
            .collect();
        PlayerTable {
            column_names: self.column_names.clone(),
            rows,
        }
    }
}
