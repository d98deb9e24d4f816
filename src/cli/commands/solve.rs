//! Solve command - Minimax values for every move from a position

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{format_number, print_kv, print_section},
    minimax::{SearchReport, TieBreak, search},
    tictactoe::{Board, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Compute minimax values and the optimal move for a position")]
pub struct SolveArgs {
    /// Board as 9 cells, row-major, using X, O and '.' (e.g. "XO..X....")
    #[arg(long, short = 's', default_value = ".........")]
    pub state: String,

    /// Export the search report to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SolveExport<'a> {
    board: String,
    player: Player,
    outcome: Option<GameOutcome>,
    report: &'a SearchReport,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = Board::from_string(&args.state)
        .with_context(|| format!("invalid board '{}'", args.state))?;
    let report = search(&board, &mut TieBreak::First);

    print_section("Position");
    println!("{board}");
    print_kv("To move", &board.player().to_string());

    let outcome = GameOutcome::of(&board);
    match outcome {
        Some(GameOutcome::Win(winner)) => print_kv("Outcome", &format!("{winner} wins")),
        Some(GameOutcome::Draw) => print_kv("Outcome", "tie"),
        None => {
            print_section("Move values (+1 X wins, -1 O wins, 0 draw)");
            for evaluation in &report.evaluations {
                print_kv(&evaluation.action.to_string(), &evaluation.value.to_string());
            }
            print_section("Optimal play");
            if let Some(best) = report.best {
                print_kv("Best move", &best.to_string());
            }
            print_kv("Game value", &report.value.to_string());
        }
    }
    print_kv("Nodes searched", &format_number(report.nodes as usize));

    if let Some(path) = &args.export {
        export_report(&board, outcome, &report, path)?;
        println!("\nSearch report exported to: {}", path.display());
    }

    Ok(())
}

fn export_report(
    board: &Board,
    outcome: Option<GameOutcome>,
    report: &SearchReport,
    path: &Path,
) -> Result<()> {
    let export = SolveExport {
        board: board.encode(),
        player: board.player(),
        outcome,
        report,
    };
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(file, &export)?;
    Ok(())
}
