use super::model::PlayerTable;

/// Horizontal placement hint for a cell. Display-only, never part of the
/// data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Center,
}

// ---------------------------------------------------------------------------
// TableModel – what a grid widget needs to paint a table
// ---------------------------------------------------------------------------

/// Read-only view of a rectangular table, independent of any GUI toolkit.
pub trait TableModel {
    fn row_count(&self) -> usize;

    fn column_count(&self) -> usize;

    /// Display text of a cell; `None` outside the table.
    fn cell_text(&self, row: usize, col: usize) -> Option<String>;

    /// Column label, in source order; `None` outside the table.
    fn column_header(&self, col: usize) -> Option<String>;

    /// Row label as shown to the user, counting from 1.
    fn row_header(&self, row: usize) -> String {
        (row + 1).to_string()
    }

    /// Presentation hint for a cell.
    fn cell_alignment(&self, row: usize, col: usize) -> Alignment;
}

/// Table model over an owned snapshot of search results.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerTableModel {
    snapshot: PlayerTable,
}

impl PlayerTableModel {
    pub fn new(snapshot: PlayerTable) -> Self {
        Self { snapshot }
    }
}

impl TableModel for PlayerTableModel {
    fn row_count(&self) -> usize {
        self.snapshot.len()
    }

    fn column_count(&self) -> usize {
        self.snapshot.column_count()
    }

    fn cell_text(&self, row: usize, col: usize) -> Option<String> {
        self.snapshot.cell(row, col).map(|v| v.to_string())
    }

    fn column_header(&self, col: usize) -> Option<String> {
        self.snapshot.column_names.get(col).cloned()
    }

    fn cell_alignment(&self, _row: usize, _col: usize) -> Alignment {
        Alignment::Center
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn model() -> PlayerTableModel {
        PlayerTableModel::new(PlayerTable::new(
            vec!["Player Name".into(), "Team".into(), "Year".into()],
            vec![
                vec![
                    CellValue::Text("Virat Kohli".into()),
                    CellValue::Text("RCB".into()),
                    CellValue::Integer(2021),
                ],
                vec![
                    CellValue::Text("Virat Kohli".into()),
                    CellValue::Null,
                    CellValue::Integer(2022),
                ],
            ],
        ))
    }

    #[test]
    fn shape_and_cells() {
        let m = model();
        assert_eq!(m.row_count(), 2);
        assert_eq!(m.column_count(), 3);
        assert_eq!(m.cell_text(0, 2).as_deref(), Some("2021"));
        assert_eq!(m.cell_text(1, 1).as_deref(), Some("nan"));
    }

    #[test]
    fn out_of_range_cells_are_absent() {
        let m = model();
        assert_eq!(m.cell_text(2, 0), None);
        assert_eq!(m.cell_text(0, 3), None);
        assert_eq!(m.column_header(3), None);
    }

    #[test]
    fn headers() {
        let m = model();
        assert_eq!(m.row_header(0), "1");
        assert_eq!(m.row_header(1), "2");
        let names: Vec<_> = (0..m.column_count())
            .filter_map(|c| m.column_header(c))
            .collect();
        assert_eq!(names, vec!["Player Name", "Team", "Year"]);
    }

    #[test]
    fn cells_are_centered() {
        assert_eq!(model().cell_alignment(0, 0), Alignment::Center);
    }
}
