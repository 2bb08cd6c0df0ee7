use std::fmt;

use super::board::Cell;

/// Number of players in a game. Fixed for the whole engine.
pub const PLAYER_COUNT: usize = 2;

/// The mark a player puts on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Black,
    White,
}

impl Sign {
    /// Get the opposing sign
    pub fn other(self) -> Sign {
        match self {
            Sign::Black => Sign::White,
            Sign::White => Sign::Black,
        }
    }

    /// Convert sign to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Sign::Black => Cell::Black,
            Sign::White => Cell::White,
        }
    }

    /// Character used when rendering the board
    pub fn symbol(self) -> char {
        self.to_cell().symbol()
    }

    /// Get sign name for display
    pub fn name(self) -> &'static str {
        match self {
            Sign::Black => "Black",
            Sign::White => "White",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_sign() {
        assert_eq!(Sign::Black.other(), Sign::White);
        assert_eq!(Sign::White.other(), Sign::Black);
    }

    #[test]
    fn test_sign_symbols() {
        assert_eq!(Sign::Black.to_string(), "X");
        assert_eq!(Sign::White.to_string(), "0");
        assert_eq!(Sign::White.name(), "White");
    }
}
