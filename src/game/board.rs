use std::fmt;

use super::sign::Sign;

/// Edge length of a standard Othello board.
pub const DEFAULT_SIZE: usize = 8;

/// The eight compass directions a flip line can run in, as (row_step, col_step).
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// Character used when rendering the board
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Black => 'X',
            Cell::White => '0',
        }
    }
}

/// Square Othello grid with running disk counts.
///
/// `black + white + empty == size * size` holds after every operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    black: usize,
    white: usize,
    empty: usize,
}

impl Board {
    /// Create a board of the given edge length with the four center disks placed.
    ///
    /// `size` must be even and at least 2.
    pub fn new(size: usize) -> Self {
        assert!(
            size >= 2 && size % 2 == 0,
            "board size must be even and at least 2, got {size}"
        );

        let mut board = Board {
            size,
            cells: vec![Cell::Empty; size * size],
            black: 0,
            white: 0,
            empty: size * size,
        };

        let pos = (size / 2) as isize;
        board.set_disk(pos - 1, pos - 1, Sign::Black);
        board.set_disk(pos, pos, Sign::Black);
        board.set_disk(pos - 1, pos, Sign::White);
        board.set_disk(pos, pos - 1, Sign::White);
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn black_disks(&self) -> usize {
        self.black
    }

    pub fn white_disks(&self) -> usize {
        self.white
    }

    pub fn empty_slots(&self) -> usize {
        self.empty
    }

    pub fn total_disks(&self) -> usize {
        self.black + self.white
    }

    /// Disk count for one side
    pub fn disks(&self, sign: Sign) -> usize {
        match sign {
            Sign::Black => self.black,
            Sign::White => self.white,
        }
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, column 0 is the left edge.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    /// Iterate over the grid one row at a time, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }

    /// The four corners: top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Cell; 4] {
        let last = self.size - 1;
        [
            self.get(0, 0),
            self.get(0, last),
            self.get(last, 0),
            self.get(last, last),
        ]
    }

    /// Deep, independent copy of the grid and its counts.
    pub fn copy_grid(&self) -> Board {
        self.clone()
    }

    /// True iff either coordinate falls outside `[0, size)`.
    pub fn is_outside_board(&self, row: isize, col: isize) -> bool {
        row < 0 || col < 0 || row >= self.size as isize || col >= self.size as isize
    }

    fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if self.is_outside_board(row, col) {
            None
        } else {
            Some(self.get(row as usize, col as usize))
        }
    }

    /// Put a disk on a cell or replace the one already there.
    ///
    /// Off-board writes are ignored. Replacing an opposing disk moves one unit
    /// between the two color counts, which is how a flip is accounted for.
    pub fn set_disk(&mut self, row: isize, col: isize, sign: Sign) {
        let Some(current) = self.cell_at(row, col) else {
            return;
        };

        if current == Cell::Empty {
            self.empty -= 1;
            *self.count_mut(sign) += 1;
        } else if current != sign.to_cell() {
            *self.count_mut(sign.other()) -= 1;
            *self.count_mut(sign) += 1;
        }

        let idx = row as usize * self.size + col as usize;
        self.cells[idx] = sign.to_cell();
    }

    fn count_mut(&mut self, sign: Sign) -> &mut usize {
        match sign {
            Sign::Black => &mut self.black,
            Sign::White => &mut self.white,
        }
    }

    /// Flip the opposing disks between (row, col) and the nearest `sign` disk
    /// in direction (row_step, col_step).
    ///
    /// Nothing changes if the run of opposing disks ends at an empty cell or
    /// at the board edge.
    pub fn set_disk_line(
        &mut self,
        row: isize,
        col: isize,
        sign: Sign,
        row_step: isize,
        col_step: isize,
    ) {
        if row_step == 0 && col_step == 0 {
            return;
        }

        let own = sign.to_cell();
        let opponent = sign.other().to_cell();

        let (mut end_row, mut end_col) = (row + row_step, col + col_step);
        loop {
            match self.cell_at(end_row, end_col) {
                Some(cell) if cell == opponent => {
                    end_row += row_step;
                    end_col += col_step;
                }
                Some(cell) if cell == own => break,
                _ => return,
            }
        }

        let (mut r, mut c) = (row + row_step, col + col_step);
        while (r, c) != (end_row, end_col) {
            self.set_disk(r, c, sign);
            r += row_step;
            c += col_step;
        }
    }

    /// Place a disk and flip every line it closes, following the Othello rules.
    pub fn set_disk_board(&mut self, row: usize, col: usize, sign: Sign) {
        let (row, col) = (row as isize, col as isize);
        self.set_disk(row, col, sign);
        for (row_step, col_step) in DIRECTIONS {
            self.set_disk_line(row, col, sign, row_step, col_step);
        }
    }

    /// True iff one of the four orthogonal neighbours holds a disk of either color.
    pub fn connected(&self, row: usize, col: usize) -> bool {
        let (row, col) = (row as isize, col as isize);
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .any(|(dr, dc)| matches!(self.cell_at(row + dr, col + dc), Some(c) if c != Cell::Empty))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
