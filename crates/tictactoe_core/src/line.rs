//! The eight winning lines.

use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A line of three squares that wins when filled by one player.
///
/// Variants are declared in evaluation order: rows, then columns,
/// then diagonals.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Line {
    /// Row 0.
    #[display("top row")]
    TopRow,
    /// Row 1.
    #[display("middle row")]
    MiddleRow,
    /// Row 2.
    #[display("bottom row")]
    BottomRow,
    /// Column 0.
    #[display("left column")]
    LeftColumn,
    /// Column 1.
    #[display("center column")]
    CenterColumn,
    /// Column 2.
    #[display("right column")]
    RightColumn,
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// All lines in evaluation order.
    pub const ALL: [Line; 8] = [
        Line::TopRow,
        Line::MiddleRow,
        Line::BottomRow,
        Line::LeftColumn,
        Line::CenterColumn,
        Line::RightColumn,
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// The three positions forming this line.
    pub fn cells(self) -> [Position; 3] {
        use Position::*;

        match self {
            Line::TopRow => [TopLeft, TopCenter, TopRight],
            Line::MiddleRow => [MiddleLeft, Center, MiddleRight],
            Line::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            Line::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            Line::CenterColumn => [TopCenter, Center, BottomCenter],
            Line::RightColumn => [TopRight, MiddleRight, BottomRight],
            Line::MainDiagonal => [TopLeft, Center, BottomRight],
            Line::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// Whether `pos` is one of this line's cells.
    pub fn contains(self, pos: Position) -> bool {
        self.cells().contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_matches_declaration_order() {
        assert!(Line::iter().eq(Line::ALL));
    }

    #[test]
    fn test_rows_share_row_and_columns_share_col() {
        for line in [Line::TopRow, Line::MiddleRow, Line::BottomRow] {
            let [a, b, c] = line.cells();
            assert!(a.row() == b.row() && b.row() == c.row());
        }
        for line in [Line::LeftColumn, Line::CenterColumn, Line::RightColumn] {
            let [a, b, c] = line.cells();
            assert!(a.col() == b.col() && b.col() == c.col());
        }
    }

    #[test]
    fn test_every_cell_on_some_line() {
        for pos in Position::ALL {
            assert!(Line::ALL.iter().any(|line| line.contains(pos)));
        }
    }
}
