use crate::grid::dimension::{Axis, DimensionModel};
use crate::math::rational::canonicalize;
use crate::prelude::{EntryError, EntryResult, GridSnapshot, SetupError};
use crate::telemetry::log::ValidationLog;
use ndarray::Array2;

/// Owned state of one matrix-entry widget: a pair of dimension steppers and
/// the 2-D cell container they shape.
#[derive(Debug, Clone)]
pub struct GridModel {
    id: String,
    row_dim: DimensionModel,
    col_dim: DimensionModel,
    cells: Array2<String>,
    log: ValidationLog,
}

impl GridModel {
    /// Default 1x1 blank grid.
    pub fn new(id: impl Into<String>, max_rows: usize, max_cols: usize) -> Self {
        let id = id.into();
        let row_dim = DimensionModel::new(Axis::Row, max_rows);
        let col_dim = DimensionModel::new(Axis::Column, max_cols);
        let cells = Array2::from_elem((row_dim.last_valid(), col_dim.last_valid()), String::new());
        let log = ValidationLog::new(id.clone());
        Self {
            id,
            row_dim,
            col_dim,
            cells,
            log,
        }
    }

    /// Rebuilds from a serialized snapshot, trusting its shape over the
    /// declared maxima.
    pub fn from_saved(
        id: impl Into<String>,
        snapshot: &GridSnapshot,
        max_rows: usize,
        max_cols: usize,
    ) -> Result<Self, SetupError> {
        let id = id.into();
        let rows = snapshot.len();
        let columns = snapshot.first().map(Vec::len).unwrap_or(0);
        if rows == 0 || columns == 0 {
            return Err(SetupError::EmptySnapshot(id));
        }
        for (row, cells) in snapshot.iter().enumerate() {
            if cells.len() != columns {
                return Err(SetupError::RaggedSnapshot {
                    id,
                    row,
                    found: cells.len(),
                    expected: columns,
                });
            }
        }

        let mut model = Self::new(id, max_rows, max_cols);
        model.row_dim.restore(rows);
        model.col_dim.restore(columns);
        model.cells = Array2::from_shape_fn((rows, columns), |(row, column)| {
            snapshot[row][column].clone()
        });
        model
            .log
            .record(&format!("restored {}x{} grid from session", rows, columns));
        Ok(model)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Re-clamps and returns the row count.
    pub fn rows(&mut self) -> usize {
        self.row_dim.validate()
    }

    /// Re-clamps and returns the column count.
    pub fn columns(&mut self) -> usize {
        self.col_dim.validate()
    }

    pub fn row_dim(&self) -> &DimensionModel {
        &self.row_dim
    }

    pub fn col_dim(&self) -> &DimensionModel {
        &self.col_dim
    }

    pub fn dim_mut(&mut self, axis: Axis) -> &mut DimensionModel {
        match axis {
            Axis::Row => &mut self.row_dim,
            Axis::Column => &mut self.col_dim,
        }
    }

    /// Validates both steppers; when the validated shape differs from the
    /// current cell container the cells are discarded and rebuilt blank,
    /// never resized in place.
    pub fn commit_dimensions(&mut self) -> (usize, usize) {
        let shape = (self.rows(), self.columns());
        if shape != self.cells.dim() {
            self.cells = Array2::from_elem(shape, String::new());
            self.log
                .record(&format!("grid rebuilt to {}x{}", shape.0, shape.1));
        }
        shape
    }

    pub fn entry(&self, row: usize, column: usize) -> EntryResult<&str> {
        let (rows, columns) = self.cells.dim();
        self.cells
            .get((row, column))
            .map(String::as_str)
            .ok_or(EntryError::OutOfRange {
                row,
                column,
                rows,
                columns,
            })
    }

    pub fn set_entry(&mut self, row: usize, column: usize, value: String) -> EntryResult<()> {
        let (rows, columns) = self.cells.dim();
        let cell = self
            .cells
            .get_mut((row, column))
            .ok_or(EntryError::OutOfRange {
                row,
                column,
                rows,
                columns,
            })?;
        *cell = value;
        Ok(())
    }

    /// Validates every cell for the re-clamped shape: clean, canonicalize,
    /// write the canonical text back into the cell, and collect the output
    /// grid.
    pub fn to_array(&mut self) -> EntryResult<GridSnapshot> {
        let rows = self.rows();
        let columns = self.columns();
        let mut output = Vec::with_capacity(rows);
        for row in 0..rows {
            let mut out_row = Vec::with_capacity(columns);
            for column in 0..columns {
                let canonical = canonicalize(self.entry(row, column)?)?;
                self.set_entry(row, column, canonical.clone())?;
                out_row.push(canonical);
            }
            output.push(out_row);
        }
        Ok(output)
    }

    /// Blanks every cell; the dimensions stay as they are.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.clear();
        }
        self.log.record("entries cleared");
    }

    /// Current cell texts, row-major.
    pub fn snapshot(&self) -> GridSnapshot {
        let (rows, columns) = self.cells.dim();
        (0..rows)
            .map(|row| {
                (0..columns)
                    .map(|column| self.cells[[row, column]].clone())
                    .collect()
            })
            .collect()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.cells.dim()
    }
}
