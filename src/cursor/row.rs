use crate::types::CellValue;

/// One fixed-width tuple of cells. The width is set when the row is
/// allocated and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    cells: Box<[CellValue]>,
}

impl Row {
    pub(crate) fn nulls(width: usize) -> Self {
        Self {
            cells: vec![CellValue::Null; width].into_boxed_slice(),
        }
    }

    pub(crate) fn from_cells(cells: Box<[CellValue]>) -> Self {
        Self { cells }
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [CellValue] {
        &mut self.cells
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    pub fn get(&self, column: usize) -> Option<&CellValue> {
        self.cells.get(column)
    }

    pub fn is_null(&self, column: usize) -> bool {
        matches!(self.get(column), Some(CellValue::Null))
    }

    pub fn column_count(&self) -> usize {
        self.cells.len()
    }

    pub fn into_cells(self) -> Box<[CellValue]> {
        self.cells
    }
}
