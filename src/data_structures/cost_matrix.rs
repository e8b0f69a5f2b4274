use crate::graph::Graph;
use num_traits::Float;
use std::fmt::{self, Debug};

/// Dense `n x n` grid of path costs; infinity marks "no path".
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix<W>
where
    W: Float + Debug + Copy,
{
    size: usize,
    cells: Vec<W>,
}

impl<W> CostMatrix<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a matrix with every cell set to `value`
    pub fn filled(size: usize, value: W) -> Self {
        CostMatrix {
            size,
            cells: vec![value; size * size],
        }
    }

    /// Direct-edge view of `graph`: zero on the diagonal, infinity where there is no edge
    pub fn adjacency<G: Graph<W>>(graph: &G) -> Self {
        let n = graph.vertex_count();
        let mut matrix = Self::filled(n, W::infinity());
        for from in 0..n {
            matrix.set(from, from, W::zero());
            for (to, weight) in graph.outgoing_edges(from) {
                matrix.set(from, to, weight);
            }
        }
        matrix
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// # Panics
    ///
    /// Panics if `row` or `col` is not below [`size`](Self::size).
    pub fn get(&self, row: usize, col: usize) -> W {
        assert!(row < self.size && col < self.size, "cell ({}, {}) out of bounds", row, col);
        self.cells[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: W) {
        assert!(row < self.size && col < self.size, "cell ({}, {}) out of bounds", row, col);
        self.cells[row * self.size + col] = value;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[W]> + '_ {
        self.cells.chunks(self.size.max(1))
    }

    /// Rows as plain `f64`, with `None` standing in for infinity
    pub fn to_finite_rows(&self) -> Vec<Vec<Option<f64>>> {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|w| w.to_f64().filter(|v| v.is_finite()))
                    .collect()
            })
            .collect()
    }
}

impl<W> fmt::Display for CostMatrix<W>
where
    W: Float + Debug + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|w| match w.to_f64() {
                    Some(v) if v.is_finite() => format!("{:6.1}", v),
                    _ => "   inf".to_string(),
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

