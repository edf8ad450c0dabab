use std::io::{self, BufRead, Write};

use color_eyre::eyre::{WrapErr, eyre};
use cube_core::MoveSequence;
use itertools::Itertools;
use owo_colors::OwoColorize;

use crate::{render::Renderer, session::Session};

const HELP: &str = "\
<moves>       apply moves, e.g. R U R' U'
undo, redo    step through the move history
scramble [N]  apply a random scramble of N moves
solve         print a solution for the current cube
auto          apply the solution (undoable)
reset         start over from a solved cube
show          print the cube
history       list the applied moves
help          show this message
quit          leave";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Moves(MoveSequence),
    Undo,
    Redo,
    Scramble(Option<usize>),
    Solve,
    Auto,
    Reset,
    Show,
    History,
    Help,
    Quit,
}

impl Command {
    /// `None` for a blank line.
    pub fn parse(line: &str) -> color_eyre::Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(None);
        };
        let command = match first {
            "undo" => Command::Undo,
            "redo" => Command::Redo,
            "scramble" => Command::Scramble(
                words
                    .next()
                    .map(str::parse::<usize>)
                    .transpose()
                    .wrap_err("The scramble length must be a number")?,
            ),
            "solve" => Command::Solve,
            "auto" => Command::Auto,
            "reset" => Command::Reset,
            "show" => Command::Show,
            "history" => Command::History,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Ok(Some(Command::Moves(line.parse()?))),
        };
        if let Some(extra) = words.next() {
            return Err(eyre!("Unexpected `{extra}` after `{first}`"));
        }
        Ok(Some(command))
    }
}

pub struct Repl {
    pub session: Session,
    pub renderer: Renderer,
    pub scramble_length: usize,
}

impl Repl {
    pub fn run(mut self) -> color_eyre::Result<()> {
        println!("{}", self.renderer.net(self.session.state()));
        println!("Type `help` for commands.");

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("> ");
            io::stdout().flush()?;
            let Some(line) = lines.next().transpose()? else {
                return Ok(());
            };
            match Command::parse(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => return Ok(()),
                Ok(Some(command)) => self.execute(command),
                Err(e) => println!("{}", e.red()),
            }
        }
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::Moves(moves) => {
                self.session.apply_sequence(&moves);
                self.show();
            }
            Command::Undo => match self.session.undo() {
                Some(token) => {
                    println!("Undid {token}");
                    self.show();
                }
                None => println!("Nothing to undo"),
            },
            Command::Redo => match self.session.redo() {
                Some(token) => {
                    println!("Redid {token}");
                    self.show();
                }
                None => println!("Nothing to redo"),
            },
            Command::Scramble(length) => {
                let scramble = cube_core::scramble(length.unwrap_or(self.scramble_length));
                println!("{scramble}");
                self.session.apply_sequence(&scramble);
                self.show();
            }
            Command::Solve => {
                let report = self.session.solution();
                if !report.records.is_empty() {
                    println!("{}", self.renderer.solution(&report.records));
                }
                println!("{}", self.renderer.verdict(&report));
            }
            Command::Auto => {
                let report = self.session.auto_solve();
                println!("{}", report.sequence());
                println!("{}", self.renderer.verdict(&report));
                self.show();
            }
            Command::Reset => {
                self.session.reset();
                self.show();
            }
            Command::Show => self.show(),
            Command::History => {
                let applied = self.session.history().applied();
                println!("{}", applied.iter().map(|entry| entry.token).join(" "));
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => {}
        }
    }

    fn show(&self) {
        print!("{}", self.renderer.net(self.session.state()));
        if self.session.state().is_solved() {
            println!("Solved!");
        }
    }
}
