use std::str::FromStr;

use crate::{Board, Direction, Error, Result, BLANK};

/// Whitespace separated rows, one per line. `.` or `_` mark the blank; empty
/// lines and `#` comments are skipped.
impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (line, lineno) in s.lines().zip(1..) {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|token| match token {
                    "." | "_" => Ok(BLANK),
                    _ => token.parse::<u8>().map_err(|_| Error::Parse {
                        line: lineno,
                        message: format!("invalid tile {token:?}"),
                    }),
                })
                .collect::<Result<Vec<_>>>()?;
            if let Some(first) = rows.first().map(Vec::len) {
                if row.len() != first {
                    return Err(Error::Parse {
                        line: lineno,
                        message: format!("row has {} tiles, expecting {first}", row.len()),
                    });
                }
            }
            rows.push(row);
        }
        if rows.is_empty() {
            return Err(Error::Parse {
                line: 0,
                message: "no board rows".into(),
            });
        }
        Board::new(rows.as_slice())
    }
}

impl TryFrom<char> for Direction {
    type Error = Error;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Ok(match ch.to_ascii_uppercase() {
            'U' => Direction::Up,
            'D' => Direction::Down,
            'L' => Direction::Left,
            'R' => Direction::Right,
            _ => {
                return Err(Error::Parse {
                    line: 0,
                    message: format!("invalid move {ch:?}"),
                })
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_and_comments() {
        let board = "# demo\n 1 2 3\n\n4 5 6\n7 8 .\n".parse::<Board>().unwrap();
        assert_eq!(board, Board::solved(3));
        let board = "1 2\n_ 3".parse::<Board>().unwrap();
        assert_eq!(board.locate_blank(), Ok((1, 0)));
    }

    #[test]
    fn round_trips_display() {
        let board = Board::solved(4).apply_move(Direction::Up);
        assert_eq!(board.to_string().parse::<Board>(), Ok(board));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(
            "1 2\n3 x".parse::<Board>(),
            Err(Error::Parse {
                line: 2,
                message: "invalid tile \"x\"".into()
            })
        );
        assert!(matches!(
            "1 2 3\n4 5".parse::<Board>(),
            Err(Error::Parse { line: 2, .. })
        ));
        assert!(matches!(
            "1 2\n3 4".parse::<Board>(),
            Err(Error::InvariantViolation(_))
        ));
        assert!(matches!("\n# nothing\n".parse::<Board>(), Err(Error::Parse { .. })));
    }

    #[test]
    fn parses_moves() {
        let dirs = "UdLr"
            .chars()
            .map(Direction::try_from)
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(
            dirs,
            [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
        );
        assert!(Direction::try_from('x').is_err());
    }
}
