use crate::color::Rgba;
use crate::vector::Vector2;

/// Reference to a texture owned by the render backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureHandle {
    /// Index into the backend's texture table
    pub id: usize,
    pub width: u32,
    pub height: u32,
}

/// Content of one grid square
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    Empty,
    Solid(Rgba),
    Textured(TextureHandle),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Rectangular grid of cells, stored row-major
///
/// Built once from a jagged list of rows; read-only afterwards.
#[derive(Debug, Clone)]
pub struct Scene {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    /// Content substituted for walls whose texture failed to load
    fallback: Cell,
}

impl Scene {
    /// Create a scene from jagged rows, right-padding short rows with `Cell::Empty`
    pub fn new(rows: Vec<Vec<Cell>>, fallback: Cell) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let height = rows.len();

        let mut cells = Vec::with_capacity(width * height);
        for mut row in rows {
            row.resize(width, Cell::Empty);
            cells.extend(row);
        }

        Scene {
            width: width as i32,
            height: height as i32,
            cells,
            fallback,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// `(width, height)` as a vector
    pub fn size(&self) -> Vector2 {
        Vector2::new(self.width as f64, self.height as f64)
    }

    pub fn fallback(&self) -> Cell {
        self.fallback
    }

    /// Check if a continuous point lies within `[0, width) x [0, height)`
    pub fn inside_map(&self, p: Vector2) -> bool {
        p.x >= 0.0 && p.x < self.width as f64 && p.y >= 0.0 && p.y < self.height as f64
    }

    /// Cell containing `p`, or `None` outside the map
    pub fn get_cell(&self, p: Vector2) -> Option<&Cell> {
        if !self.inside_map(p) {
            return None;
        }
        self.cell_at(p.x.floor() as i32, p.y.floor() as i32)
    }

    /// Cell at integer coordinates, or `None` outside the map
    pub fn cell_at(&self, col: i32, row: i32) -> Option<&Cell> {
        if col < 0 || col >= self.width || row < 0 || row >= self.height {
            return None;
        }
        self.cells.get(self.get_id(col, row))
    }

    /// Check if the cell containing `p` exists and is occupied
    pub fn is_wall(&self, p: Vector2) -> bool {
        self.get_cell(p).is_some_and(|cell| !cell.is_empty())
    }

    /// Check if the cell at integer coordinates exists and is occupied
    pub fn is_wall_at(&self, col: i32, row: i32) -> bool {
        self.cell_at(col, row).is_some_and(|cell| !cell.is_empty())
    }

    /// Iterate over `((col, row), cell)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = ((i32, i32), &Cell)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(id, cell)| ((id as i32 % width, id as i32 / width), cell))
    }

    fn get_id(&self, col: i32, row: i32) -> usize {
        (col + row * self.width) as usize
    }
}
