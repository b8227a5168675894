use std::fmt;

use crate::{Board, Direction, Solution, Step, BLANK};

impl Board {
    /// Column width wide enough for the largest tile.
    pub fn cell_width(&self) -> usize {
        let largest = self.side() * self.side() - 1;
        largest.to_string().len()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.cell_width();
        for row in self.rows() {
            for (col, &tile) in row.iter().enumerate() {
                if col != 0 {
                    " ".fmt(f)?;
                }
                if tile == BLANK {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{tile:>width$}")?;
                }
            }
            "\n".fmt(f)?;
        }
        Ok(())
    }
}

impl Direction {
    pub fn as_char(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_char().fmt(f)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Moves: {}", self.moves)?;
        if let Some(dir) = self.direction {
            write!(f, " ({dir})")?;
        }
        writeln!(f)?;
        self.board.fmt(f)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (step, i) in self.steps().iter().zip(0..) {
            if i != 0 {
                "\n".fmt(f)?;
            }
            step.fmt(f)?;
        }
        Ok(())
    }
}
