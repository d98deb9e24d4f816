//! Play command - Interactive Tic-Tac-Toe against minimax

use std::io::{self, BufRead, Write};

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    cli::{config::PlayConfig, prompt::prompt_line},
    minimax::{TieBreak, minimax_with},
    tictactoe::{Action, Game, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play Tic-Tac-Toe against the minimax player")]
pub struct PlayArgs {
    /// Which token the human controls (`x` or `o`); X moves first
    #[arg(long, default_value = "x")]
    pub human: String,

    /// Seed for random tie-breaking between equally good moves
    #[arg(long)]
    pub seed: Option<u64>,
}

impl PlayArgs {
    pub fn config(&self) -> Result<PlayConfig> {
        Ok(PlayConfig {
            human: parse_player_token(&self.human, "--human")?,
            seed: self.seed,
        })
    }
}

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" => Ok(Player::X),
        "o" | "second" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

/// Parse `row col` (0-based), also accepting `row,col`
pub(crate) fn parse_action(line: &str) -> Result<Action> {
    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        bail!("expected 'row col', got '{line}'");
    };
    Ok(Action::new(row.parse()?, col.parse()?))
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.config()?;
    let stdin = io::stdin();
    run(&config, &mut stdin.lock(), &mut io::stdout())?;
    Ok(())
}

/// Play one game, reading human moves from `input`
pub fn run<R: BufRead, W: Write>(
    config: &PlayConfig,
    input: &mut R,
    output: &mut W,
) -> Result<GameOutcome> {
    let mut tie_break = match config.seed {
        Some(seed) => TieBreak::Random(StdRng::seed_from_u64(seed)),
        None => TieBreak::First,
    };
    let mut game = Game::new();

    writeln!(
        output,
        "You play {}, the computer plays {}. Enter moves as 'row col' (0-2).",
        config.human,
        config.human.opponent()
    )?;

    while !game.is_over() {
        let board = game.current_state()?;
        writeln!(output, "\n{board}")?;

        if board.player() == config.human {
            let Some(line) = prompt_line(input, output, "Your move: ")? else {
                bail!("input closed before the game finished");
            };
            let played = parse_action(&line)
                .and_then(|action| game.play(action).map_err(anyhow::Error::from));
            if let Err(err) = played {
                writeln!(output, "Invalid move: {err}")?;
            }
        } else {
            let action = minimax_with(&board, &mut tie_break)
                .ok_or_else(|| anyhow!("no move available on a non-terminal board"))?;
            writeln!(output, "Computer plays {action}")?;
            game.play(action)?;
        }
    }

    let outcome = game
        .outcome
        .ok_or_else(|| anyhow!("game ended without an outcome"))?;
    writeln!(output, "\n{}", game.current_state()?)?;
    match outcome {
        GameOutcome::Win(player) if player == config.human => {
            writeln!(output, "Game over: you win.")?
        }
        GameOutcome::Win(player) => writeln!(output, "Game over: {player} wins.")?,
        GameOutcome::Draw => writeln!(output, "Game over: tie.")?,
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_action("1 2").unwrap(), Action::new(1, 2));
        assert_eq!(parse_action(" 0,0 ").unwrap(), Action::new(0, 0));
        assert!(parse_action("1").is_err());
        assert!(parse_action("a b").is_err());
    }

    #[test]
    fn test_parse_player_token() {
        assert_eq!(parse_player_token("O", "--human").unwrap(), Player::O);
        assert!(parse_player_token("z", "--human").is_err());
    }

    fn every_cell() -> String {
        (0..9).map(|i| format!("{} {}\n", i / 3, i % 3)).collect()
    }

    #[test]
    fn test_computer_never_loses_as_x() {
        let config = PlayConfig {
            human: Player::O,
            seed: None,
        };
        let mut input = Cursor::new(every_cell());
        let mut output = Vec::new();

        let outcome = run(&config, &mut input, &mut output).unwrap();
        assert_ne!(outcome, GameOutcome::Win(Player::O));
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Computer plays"));
        assert!(transcript.contains("Game over"));
    }

    #[test]
    fn test_computer_never_loses_as_o() {
        let config = PlayConfig {
            human: Player::X,
            seed: Some(3),
        };
        let mut input = Cursor::new(every_cell().repeat(2));
        let mut output = Vec::new();

        let outcome = run(&config, &mut input, &mut output).unwrap();
        assert_ne!(outcome, GameOutcome::Win(Player::X));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let config = PlayConfig::default();
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(run(&config, &mut input, &mut output).is_err());
    }
}
