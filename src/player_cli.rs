#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use log::warn;
use rand::rngs::SmallRng;

use crate::{
    board::Grid,
    common::{BoardError, GuessResult},
    coord::Coordinate,
    player::Player,
    ui::render_grid,
};

/// Keyboard-controlled player. Reads one coordinate per turn, re-prompting
/// until the line parses.
pub struct CliPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player reading from stdin and writing prompts to stdout.
    pub fn stdio(name: String) -> Self {
        Self::new(name, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(name: String, input: R, output: W) -> Self {
        Self {
            name,
            input,
            output,
        }
    }

    /// Everything written to the player so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    fn prompt(&mut self, opponent_view: &Grid) -> io::Result<Option<Coordinate>> {
        writeln!(self.output, "Here is the current state of the opponent's board:\n")?;
        write!(self.output, "{}", render_grid(opponent_view))?;
        writeln!(self.output, "It is now {}'s turn.", self.name)?;
        loop {
            write!(self.output, "coordinates target = ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match line.trim().parse::<Coordinate>() {
                Ok(coord) => return Ok(Some(coord)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    /// Input closing (or failing) ends the player's game with
    /// [`BoardError::InputClosed`].
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        opponent_view: &Grid,
    ) -> Result<Coordinate, BoardError> {
        match self.prompt(opponent_view) {
            Ok(Some(coord)) => Ok(coord),
            Ok(None) => Err(BoardError::InputClosed),
            Err(e) => {
                warn!("reading target failed: {}", e);
                Err(BoardError::InputClosed)
            }
        }
    }

    fn handle_guess_result(&mut self, coord: Coordinate, result: GuessResult) {
        let _ = writeln!(self.output, "{} at {}", result, coord);
    }
}
