//! Session controller: owns one game and turns input lines into placements.

use crate::config::GameConfig;
use anyhow::Result;
use std::io::{BufRead, Write};
use strictly_cube::{Cell, GameSession, PieceRenderer, SceneModel};
use tracing::{debug, info, instrument, warn};

/// What the loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading.
    Continue(String),
    /// Print the text and stop.
    Quit(String),
}

/// Owns the session state and the scene it feeds.
#[derive(Debug)]
pub struct Controller {
    session: GameSession,
    scene: SceneModel,
    config: GameConfig,
}

impl Controller {
    /// Creates a controller with a fresh session.
    #[instrument(skip(config), fields(rules = %config.rules()))]
    pub fn new(config: GameConfig) -> Self {
        info!("Starting new session");
        Self {
            session: GameSession::new(config.rules()),
            scene: SceneModel::new(),
            config,
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the scene fed by placements.
    pub fn scene(&self) -> &SceneModel {
        &self.scene
    }

    /// Prompt shown before each line.
    pub fn prompt(&self) -> String {
        let player = self.session.board().current_player();
        format!("{} ({})> ", player, player.marker())
    }

    /// Handles one line of input.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> Result<Reply> {
        let line = line.trim();
        match line {
            "" => Ok(Reply::Continue(String::new())),
            "quit" | "exit" => Ok(Reply::Quit("Bye.".to_string())),
            "help" => Ok(Reply::Continue(HELP.to_string())),
            "board" => Ok(Reply::Continue(self.session.board().to_string())),
            "json" => Ok(Reply::Continue(serde_json::to_string_pretty(
                &self.session.board().snapshot(),
            )?)),
            "restart" => {
                self.session.restart();
                self.scene.clear_pieces();
                Ok(Reply::Continue("New game.".to_string()))
            }
            _ => Ok(self.place(line)),
        }
    }

    fn place(&mut self, input: &str) -> Reply {
        let Some(cell) = Cell::parse(input) else {
            debug!(input, "Unrecognized input");
            return Reply::Continue(format!("Unrecognized input '{}'. Type 'help'.", input));
        };

        let placement = match self.session.place_at(cell) {
            Ok(placement) => placement,
            Err(e) => {
                warn!(%cell, error = %e, "Move rejected");
                return Reply::Continue(format!("{}. Try again.", e));
            }
        };

        let piece = placement.piece();
        self.scene.spawn_piece(piece.owner(), placement.offset());

        let mut text = if self.config.show_offsets() {
            format!("Placed {} (offset {})", piece, placement.offset())
        } else {
            format!("Placed {}", piece)
        };

        let status = self.session.status();
        if status.is_over() {
            text.push_str(&format!("\n{}\n{}", self.session.board(), status));
            text.push_str("\nType 'restart' for a new game or 'quit'.");
        } else if self.session.board().is_full() {
            text.push_str("\nBoard is full. Type 'restart' or 'quit'.");
        }
        Reply::Continue(text)
    }

    /// Reads lines until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        write!(output, "{}", self.prompt())?;
        output.flush()?;

        for line in input.lines() {
            match self.handle_line(&line?)? {
                Reply::Continue(text) => {
                    if !text.is_empty() {
                        writeln!(output, "{}", text)?;
                    }
                }
                Reply::Quit(text) => {
                    writeln!(output, "{}", text)?;
                    return Ok(());
                }
            }
            write!(output, "{}", self.prompt())?;
            output.flush()?;
        }

        writeln!(output)?;
        info!(pieces = self.session.board().len(), "Input closed");
        Ok(())
    }
}

const HELP: &str = "\
Enter a cell as three numbers in -1..=1 (i j k) or a label such as
top-front-left. Axes: i left to right, j bottom to top, k back to front.
Commands: board, json, restart, help, quit";
