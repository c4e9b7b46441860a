//! Resolved table grid with explicit merge-continuation cells.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A raw table cell as extracted from HTML, spans unresolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCell {
    /// Cleaned cell text.
    pub text: String,

    /// Number of columns this cell spans (>= 1).
    pub colspan: u32,

    /// Number of rows this cell spans (>= 1).
    pub rowspan: u32,
}

impl RawCell {
    /// Create a cell with no spans.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            colspan: 1,
            rowspan: 1,
        }
    }

    /// Set colspan and return self.
    pub fn colspan(mut self, span: u32) -> Self {
        self.colspan = span;
        self
    }

    /// Set rowspan and return self.
    pub fn rowspan(mut self, span: u32) -> Self {
        self.rowspan = span;
        self
    }
}

/// One slot of the resolved grid.
///
/// Text is owned exactly once, by the origin cell; continuations reference
/// their origin by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridCell {
    /// A cell that owns its text.
    Origin(String),
    /// A visual extension of a merged cell at (row, col).
    Continuation {
        /// Row of the origin cell.
        row: usize,
        /// Column of the origin cell.
        col: usize,
    },
}

/// A rectangular resolved table grid.
///
/// Invariant: every row has the same width and every slot is filled.
/// Construction fails with a `table_parse` error otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableModel {
    grid: Vec<Vec<GridCell>>,
}

impl TableModel {
    /// Resolve raw rows (with colspan/rowspan) into a rectangular grid.
    pub fn resolve(rows: &[Vec<RawCell>]) -> Result<Self> {
        let width: usize = rows
            .first()
            .map(|r| r.iter().map(|c| c.colspan.max(1) as usize).sum())
            .unwrap_or(0);
        if width == 0 {
            return Err(Error::TableParse("table has no cells".into()));
        }

        let height = rows.len();
        let mut grid: Vec<Vec<Option<GridCell>>> = vec![vec![None; width]; height];

        for (r, raw_row) in rows.iter().enumerate() {
            let mut c = 0;
            for cell in raw_row {
                while c < width && grid[r][c].is_some() {
                    c += 1;
                }
                let colspan = cell.colspan.max(1) as usize;
                // Rowspans that run past the last row are clamped; only
                // horizontal overflow is irreconcilable.
                let rowspan = (cell.rowspan.max(1) as usize).min(height - r);
                if c + colspan > width {
                    return Err(Error::TableParse(format!(
                        "row {} overflows width {} (cell spans {} columns at column {})",
                        r, width, colspan, c
                    )));
                }
                for dr in 0..rowspan {
                    for dc in 0..colspan {
                        let slot = &mut grid[r + dr][c + dc];
                        if slot.is_some() {
                            return Err(Error::TableParse(format!(
                                "overlapping spans at row {} column {}",
                                r + dr,
                                c + dc
                            )));
                        }
                        *slot = Some(if dr == 0 && dc == 0 {
                            GridCell::Origin(cell.text.clone())
                        } else {
                            GridCell::Continuation { row: r, col: c }
                        });
                    }
                }
                c += colspan;
            }
        }

        let grid = grid
            .into_iter()
            .enumerate()
            .map(|(r, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(c, slot)| {
                        slot.ok_or_else(|| {
                            Error::TableParse(format!(
                                "row {} is missing a cell at column {}",
                                r, c
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { grid })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.grid.len()
    }

    /// Number of columns (identical for every row).
    pub fn width(&self) -> usize {
        self.grid.first().map(|r| r.len()).unwrap_or(0)
    }

    /// The cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> &GridCell {
        &self.grid[row][col]
    }

    /// Text at (row, col), following continuations back to their origin.
    pub fn text_at(&self, row: usize, col: usize) -> &str {
        match &self.grid[row][col] {
            GridCell::Origin(text) => text,
            GridCell::Continuation { row, col } => match &self.grid[*row][*col] {
                GridCell::Origin(text) => text,
                // Continuations always point at an origin by construction.
                GridCell::Continuation { .. } => "",
            },
        }
    }

    /// Whether the slot at (row, col) is a merge-continuation.
    pub fn is_continuation(&self, row: usize, col: usize) -> bool {
        matches!(self.grid[row][col], GridCell::Continuation { .. })
    }

    /// Detect the common two-column "metadata table" shape: every row has
    /// width 2 and the left column is label-like (short, non-sentence
    /// strings) in a majority of rows.
    pub fn is_field_table(&self) -> bool {
        if self.width() != 2 || self.height() == 0 {
            return false;
        }
        let label_like = (0..self.height())
            .filter(|&r| {
                let label = self.text_at(r, 0);
                let len = label.chars().count();
                len > 0 && len <= 6 && !label.contains(['。', '！', '？', '，', '；'])
            })
            .count();
        label_like * 2 > self.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_simple_grid() {
        let rows = vec![
            vec![RawCell::text("a"), RawCell::text("b")],
            vec![RawCell::text("c"), RawCell::text("d")],
        ];
        let table = TableModel::resolve(&rows).unwrap();
        assert_eq!(table.height(), 2);
        assert_eq!(table.width(), 2);
        assert_eq!(table.text_at(1, 1), "d");
        assert!(!table.is_continuation(0, 0));
    }

    #[test]
    fn test_resolve_rowspan_continuation() {
        let rows = vec![
            vec![RawCell::text("merged").rowspan(2), RawCell::text("b")],
            vec![RawCell::text("d")],
        ];
        let table = TableModel::resolve(&rows).unwrap();
        assert_eq!(table.width(), 2);
        assert_eq!(table.height(), 2);
        assert!(table.is_continuation(1, 0));
        // Continuation carries the same value as its origin cell.
        assert_eq!(table.text_at(1, 0), "merged");
        assert_eq!(table.text_at(1, 1), "d");
    }

    #[test]
    fn test_resolve_colspan() {
        let rows = vec![
            vec![RawCell::text("wide").colspan(2)],
            vec![RawCell::text("a"), RawCell::text("b")],
        ];
        let table = TableModel::resolve(&rows).unwrap();
        assert_eq!(table.text_at(0, 1), "wide");
        assert!(table.is_continuation(0, 1));
    }

    #[test]
    fn test_resolve_ragged_rows_fail() {
        let rows = vec![
            vec![RawCell::text("a"), RawCell::text("b")],
            vec![RawCell::text("c")],
        ];
        let err = TableModel::resolve(&rows).unwrap_err();
        assert_eq!(err.stage(), "table_parse");
    }

    #[test]
    fn test_resolve_overflow_fails() {
        let rows = vec![
            vec![RawCell::text("a")],
            vec![RawCell::text("b"), RawCell::text("c")],
        ];
        assert!(TableModel::resolve(&rows).is_err());
    }

    #[test]
    fn test_field_table_detection() {
        let rows = vec![
            vec![RawCell::text("案号"), RawCell::text("（2024）京01执1号")],
            vec![RawCell::text("承办人"), RawCell::text("张三")],
        ];
        let table = TableModel::resolve(&rows).unwrap();
        assert!(table.is_field_table());
    }

    #[test]
    fn test_sentence_labels_not_field_table() {
        let rows = vec![
            vec![
                RawCell::text("本院认为，事实清楚。"),
                RawCell::text("第二列内容"),
            ],
            vec![
                RawCell::text("双方当事人均无异议，予以确认。"),
                RawCell::text("其他"),
            ],
        ];
        let table = TableModel::resolve(&rows).unwrap();
        assert!(!table.is_field_table());
    }
}
