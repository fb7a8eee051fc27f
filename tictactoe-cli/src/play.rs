//! Play command - interactive game against the engine
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: Console::play()
//! - Level 3: ask_first(), read_human_move(), announce()
//! - Level 4: input parsing

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};

use tictactoe_core::{GameResult, GameState, MinimaxAI, Move, Side};

use crate::config::PlayConfig;
use crate::render::render_board;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Who moves first (asked interactively if omitted)
    #[arg(long, value_enum)]
    pub first: Option<FirstPlayer>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FirstPlayer {
    Human,
    Machine,
}

impl From<FirstPlayer> for Side {
    fn from(first: FirstPlayer) -> Self {
        match first {
            FirstPlayer::Human => Side::Human,
            FirstPlayer::Machine => Side::Machine,
        }
    }
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Decide who moves first (flag, config file, or ask)
/// 2. Alternate turns until the game ends
pub fn run(args: PlayArgs, config: PlayConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let first = args.first.map(Side::from).or(config.first);

    let mut console = Console::new(stdin.lock(), stdout.lock(), config);
    let first = match first {
        Some(side) => side,
        None => console.ask_first()?,
    };

    tracing::info!("Starting game: {} moves first", first);
    let result = console.play(first)?;
    tracing::info!("Game over: {:?}", result);

    Ok(())
}

// ============================================================================
// LEVEL 2 - GAME LOOP
// ============================================================================

/// Text console over any line reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
    config: PlayConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: PlayConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Play one full game and return its result
    pub fn play(&mut self, first: Side) -> Result<GameResult> {
        let mut game = GameState::new(first);
        let mut ai = MinimaxAI::new();

        self.show(&game)?;

        while !game.result().is_over() {
            match game.to_move() {
                Side::Human => {
                    let mv = self.read_human_move(&game)?;
                    game.apply_move(mv)?;
                    tracing::debug!("human played square {}", mv.square());
                }
                Side::Machine => {
                    writeln!(self.output, "\n     The machine is thinking...")?;
                    let mv = game.play_machine(&mut ai)?;
                    writeln!(self.output, "     The machine takes square {}", mv.square())?;
                }
            }
            self.show(&game)?;
        }

        self.announce(game.result())?;
        Ok(game.result())
    }

    // ========================================================================
    // LEVEL 3 - STEPS
    // ========================================================================

    /// Ask whether the human plays first or second
    pub fn ask_first(&mut self) -> Result<Side> {
        loop {
            writeln!(
                self.output,
                "Would you like to go first or second? Type '1' or '2': "
            )?;
            let Some(answer) = self.read_line()? else {
                bail!("input closed before choosing who goes first");
            };
            match answer.as_str() {
                "1" => return Ok(Side::Human),
                "2" => return Ok(Side::Machine),
                _ => writeln!(self.output, "Invalid input")?,
            }
        }
    }

    /// Prompt until the human names an empty square
    fn read_human_move(&mut self, game: &GameState) -> Result<Move> {
        loop {
            write!(self.output, "     It's your turn! Enter a move: ")?;
            self.output.flush()?;
            let Some(answer) = self.read_line()? else {
                bail!("input closed during the game");
            };
            match parse_square(&answer) {
                Some(mv) if game.board().is_empty_at(mv) => return Ok(mv),
                Some(_) => writeln!(self.output, "     Square already taken")?,
                None => writeln!(self.output, "     Invalid move")?,
            }
        }
    }

    fn announce(&mut self, result: GameResult) -> Result<()> {
        let message = match result {
            GameResult::HumanWins => "You win!",
            GameResult::MachineWins => "The machine wins!",
            GameResult::Tie => "Tie game!",
            GameResult::Ongoing => return Ok(()),
        };
        writeln!(self.output, "\n     {message}")?;
        Ok(())
    }

    fn show(&mut self, game: &GameState) -> Result<()> {
        write!(self.output, "{}", render_board(game.board(), &self.config))?;
        Ok(())
    }

    /// Next trimmed line, or `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Accept exactly one of "1" through "9"
fn parse_square(input: &str) -> Option<Move> {
    match input {
        "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => {
            input.parse().ok().and_then(|n| Move::from_square(n).ok())
        }
        _ => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================
