use line_2d::Coord;

pub const WIDTH: usize = 640;
pub const HEIGHT: usize = 480;

/// The drawing surface: a fixed-size grid of cells, row 0 at the top,
/// column 0 at the left. Cells are marked by mouse strokes and read back
/// column by column during synthesis.
pub struct Sketch {
    cells: Vec<bool>,
}

impl Sketch {
    #[must_use]
    pub fn new() -> Sketch {
        Sketch {
            cells: vec![false; WIDTH * HEIGHT],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        WIDTH
    }

    #[must_use]
    pub fn height(&self) -> usize {
        HEIGHT
    }

    /// Marks a single cell. Coordinates outside the grid are skipped, never
    /// written.
    pub fn fill(&mut self, coord: Coord) {
        if coord.x < 0 || coord.y < 0 {
            return;
        }

        let (x, y) = (coord.x as usize, coord.y as usize);
        if x >= WIDTH || y >= HEIGHT {
            return;
        }

        self.cells[y * WIDTH + x] = true;
    }

    /// Marks every in-bounds cell on the discretized segment between the two
    /// points, endpoints included.
    pub fn draw_line(&mut self, from: Coord, to: Coord) {
        for coord in line_2d::coords_between(from, to) {
            self.fill(coord);
        }
    }

    /// Whether a cell is marked.
    ///
    /// # Panics
    ///
    /// Will panic if the coordinates are outside the grid.
    #[must_use]
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        assert!(x < WIDTH && y < HEIGHT, "Cell ({x}, {y}) is outside the grid.");

        self.cells[y * WIDTH + x]
    }

    /// The topmost marked cell in a column, or `None` if the column is
    /// empty.
    ///
    /// # Panics
    ///
    /// Will panic if the column is outside the grid.
    #[must_use]
    pub fn top_filled_row(&self, col: usize) -> Option<usize> {
        assert!(col < WIDTH, "Column {col} is outside the grid.");

        (0..HEIGHT).find(|&row| self.cells[row * WIDTH + col])
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }
}

impl Default for Sketch {
    fn default() -> Self {
        Sketch::new()
    }
}
