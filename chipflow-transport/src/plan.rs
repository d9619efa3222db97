use ndarray::Array2;

/// Dense per-pair shipping costs. Rows are suppliers, columns are consumers.
/// Costs are non-negative and immutable for the lifetime of a solve.
pub type CostMatrix = Array2<i64>;

/// An allocation plan over the same grid as the cost matrix.
///
/// Each cell is either empty or carries a non-negative quantity; the set of
/// non-empty cells forms the basis. Row sums of a feasible plan equal the
/// supplies and column sums equal the demands.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    cells: Array2<Option<f64>>,
}

impl Plan {
    pub fn empty(num_suppliers: usize, num_consumers: usize) -> Self {
        Self {
            cells: Array2::from_elem((num_suppliers, num_consumers), None),
        }
    }

    pub fn num_suppliers(&self) -> usize {
        self.cells.nrows()
    }

    pub fn num_consumers(&self) -> usize {
        self.cells.ncols()
    }

    pub fn quantity(&self, row: usize, col: usize) -> Option<f64> {
        self.cells[[row, col]]
    }

    pub fn is_allocated(&self, row: usize, col: usize) -> bool {
        self.cells[[row, col]].is_some()
    }

    pub fn allocate(&mut self, row: usize, col: usize, quantity: f64) {
        self.cells[[row, col]] = Some(quantity);
    }

    /// Returns the cell to the empty state, removing it from the basis.
    pub fn clear(&mut self, row: usize, col: usize) {
        self.cells[[row, col]] = None;
    }

    pub fn allocated_cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.cells
            .indexed_iter()
            .filter_map(|((row, col), quantity)| quantity.map(|q| (row, col, q)))
    }

    pub fn row_sum(&self, row: usize) -> f64 {
        self.cells.row(row).iter().filter_map(|q| *q).sum()
    }

    pub fn col_sum(&self, col: usize) -> f64 {
        self.cells.column(col).iter().filter_map(|q| *q).sum()
    }
}
