use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::{style, Term};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use rayon::prelude::*;
use slide_solver::{is_solvable, solve, Board, Error, Solution, SolverConfig, DEFAULT_MAX_DEPTH};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Solve sliding-tile puzzles with A* search.
#[derive(Parser)]
#[command(name = "slide-solver")]
#[command(version)]
struct Cli {
    /// Board files, one whitespace separated row per line with `.` as the blank.
    /// Solves the built-in demo board when omitted.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Give up once the search pops a board deeper than this many moves
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Only print the move string of each solution
    #[arg(long, short)]
    quiet: bool,

    /// Do not show the progress spinner
    #[arg(long)]
    no_progress: bool,
}

const DEMO: [[u8; 4]; 4] = [[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [14, 15, 13, 0]];

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let boards = if cli.files.is_empty() {
        vec![("demo".to_owned(), Board::new(&DEMO)?)]
    } else {
        cli.files
            .iter()
            .map(|path| {
                let map_data = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let board = map_data
                    .parse::<Board>()
                    .with_context(|| format!("Failed to parse {}", path.display()))?;
                Ok((path.display().to_string(), board))
            })
            .collect::<Result<Vec<_>>>()?
    };

    let config = SolverConfig {
        max_depth: cli.max_depth,
    };

    let progress = if cli.no_progress || cli.quiet {
        MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
    } else {
        MultiProgress::new()
    };
    let spinner_style =
        ProgressStyle::with_template("{spinner} {prefix}: {human_pos} boards expanded ({per_sec})")?;

    let results = boards
        .par_iter()
        .map(|(name, board)| {
            let pb = progress.add(ProgressBar::new_spinner());
            pb.set_style(spinner_style.clone());
            pb.set_prefix(name.clone());
            let result = solve(board, &config, || pb.inc(1));
            pb.finish_and_clear();
            result
        })
        .collect::<Vec<_>>();

    let term = Term::stdout();
    for ((name, board), result) in boards.iter().zip(&results) {
        if cli.quiet {
            report_quiet(&term, result)?;
        } else {
            report(&term, name, board, result)?;
        }
    }

    Ok(())
}

fn report_quiet(term: &Term, result: &Result<Solution, Error>) -> Result<()> {
    match result {
        Ok(solution) => term.write_line(&solution.directions().map(|dir| dir.as_char()).collect::<String>())?,
        Err(err) => term.write_line(&format!("error: {err}"))?,
    }
    Ok(())
}

fn report(term: &Term, name: &str, board: &Board, result: &Result<Solution, Error>) -> Result<()> {
    term.write_line(&style(name).bold().to_string())?;
    if is_solvable(board) {
        term.write_line("solvable")?;
    } else {
        term.write_line("unsolvable")?;
    }

    let solution = match result {
        Ok(solution) => solution,
        Err(err @ Error::DepthExceeded { .. }) => {
            term.write_line(&format!("{} {err}", style("gave up:").yellow()))?;
            return Ok(());
        }
        Err(err) => {
            term.write_line(&style(err).red().to_string())?;
            return Ok(());
        }
    };

    let mut prev_blank = None;
    for step in solution.steps() {
        let mut header = format!("Moves: {}", step.moves);
        if let Some(dir) = step.direction {
            header += &format!(" ({dir})");
        }
        term.write_line(&style(header).dim().to_string())?;
        term.write_str(&render(&step.board, prev_blank))?;
        term.write_line("")?;
        prev_blank = step.board.locate_blank().ok();
    }

    let moves = solution.directions().map(|dir| dir.as_char()).collect::<String>();
    term.write_line(&format!(
        "{} {} moves, {} boards expanded: {moves}",
        style("solved in").green(),
        solution.len(),
        solution.expanded(),
    ))?;
    term.write_line("")?;
    Ok(())
}

/// Like the board's `Display`, with the tile that just slid highlighted.
fn render(board: &Board, moved: Option<(usize, usize)>) -> String {
    let width = board.cell_width();
    let mut out = String::new();
    for (row, tiles) in board.rows().enumerate() {
        let cells = tiles
            .iter()
            .enumerate()
            .map(|(col, &tile)| {
                let text = if tile == slide_solver::BLANK {
                    format!("{:>width$}", ".")
                } else {
                    format!("{tile:>width$}")
                };
                if moved == Some((row, col)) {
                    style(text).cyan().bold().to_string()
                } else {
                    text
                }
            })
            .collect::<Vec<_>>();
        out += &cells.join(" ");
        out += "\n";
    }
    out
}
