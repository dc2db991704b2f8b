use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

/// A `(row, col)` pair addressing a cell.
pub type Coord = (usize, usize);

/// Which family a winning line belongs to.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum LineKind {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right: `(i, i)`.
    Diagonal,
    /// Top-right to bottom-left: `(i, size - 1 - i)`.
    AntiDiagonal,
}

/// An ordered run of `size` cells that wins the game when uniformly marked by one player.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Line {
    kind: LineKind,
    cells: Box<[Coord]>,
}

impl Line {
    fn new(kind: LineKind, cells: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            kind,
            cells: cells.into_iter().collect(),
        }
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The coordinates of this line, ordered by ascending row (columns for a row line).
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }
}

/// Shared, immutable list of every winning line for one board size.
pub type LineIndex = Arc<[Line]>;

/// One entry per board size ever requested. `Board::new` only asks for sizes up to
/// `board::MAX_SIZE`, which bounds the cache.
static LINE_INDEX_CACHE: LazyLock<Mutex<HashMap<usize, LineIndex>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Returns the line index for `size`, building it on first request.
///
/// Lines are ordered rows `0..size`, then columns `0..size`, then the diagonal, then the
/// anti-diagonal. `Board::winner` scans in this order, so it is part of the public contract.
/// Callers validate `size` first, see `Board::new`.
pub(crate) fn line_index(size: usize) -> LineIndex {
    let mut cache = LINE_INDEX_CACHE
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    cache
        .entry(size)
        .or_insert_with(|| build_lines(size))
        .clone()
}

fn build_lines(size: usize) -> LineIndex {
    let mut lines = Vec::with_capacity(2 * size + 2);
    for row in 0..size {
        lines.push(Line::new(LineKind::Row(row), (0..size).map(|col| (row, col))));
    }
    for col in 0..size {
        lines.push(Line::new(LineKind::Column(col), (0..size).map(|row| (row, col))));
    }
    lines.push(Line::new(LineKind::Diagonal, (0..size).map(|i| (i, i))));
    lines.push(Line::new(
        LineKind::AntiDiagonal,
        (0..size).map(|i| (i, size - 1 - i)),
    ));
    lines.into()
}
