/// Square adjacency matrix; entry `(i, j) > 0` marks the edge `i -> j`.
pub type Matrix = Vec<Vec<u64>>;

/// A vertex of the arena. Neighbors are indices into the owning [`Graph`]'s
/// vertex table, kept in matrix scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vertex {
    pub id: usize,
    pub out_neighbors: Vec<usize>,
    pub in_neighbors: Vec<usize>,
}

impl Vertex {
    fn new(id: usize) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn out_degree(&self) -> usize {
        self.out_neighbors.len()
    }

    pub fn in_degree(&self) -> usize {
        self.in_neighbors.len()
    }

    pub fn is_isolated(&self) -> bool {
        self.out_neighbors.is_empty() && self.in_neighbors.is_empty()
    }
}

/// Immutable directed graph built once from an adjacency matrix.
///
/// Cell values greater than one still produce a single edge; the matrix is
/// a presence map, not a multiplicity table.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    matrix: Matrix,
}

impl Graph {
    /// Builds the vertex table in row-major scan order.
    ///
    /// The matrix is expected to be square already; cells beyond the row
    /// count are ignored rather than indexed.
    pub fn from_matrix(matrix: Matrix) -> Self {
        let n = matrix.len();
        let mut vertices: Vec<Vertex> = (0..n).map(Vertex::new).collect();

        for (i, row) in matrix.iter().enumerate() {
            for (j, &cell) in row.iter().take(n).enumerate() {
                if cell > 0 {
                    vertices[i].out_neighbors.push(j);
                    vertices[j].in_neighbors.push(i);
                }
            }
        }

        Self { vertices, matrix }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::out_degree).sum()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, id: usize) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    pub fn out_neighbors(&self, id: usize) -> &[usize] {
        &self.vertices[id].out_neighbors
    }

    pub fn in_neighbors(&self, id: usize) -> &[usize] {
        &self.vertices[id].in_neighbors
    }

    pub fn out_degree(&self, id: usize) -> usize {
        self.vertices[id].out_degree()
    }

    pub fn in_degree(&self, id: usize) -> usize {
        self.vertices[id].in_degree()
    }

    /// O(1) edge test against the original matrix.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        to < self.vertices.len()
            && self
                .matrix
                .get(from)
                .and_then(|row| row.get(to))
                .is_some_and(|&cell| cell > 0)
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }
}
