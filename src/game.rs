use std::io::{self, BufRead, Write};

use crate::board::{Board, PileId, PressOutcome, ReleaseOutcome};
use crate::command::{Command, parse_command};
use crate::layout;
use crate::renderer::Renderer;

/// The interactive loop. It owns no rules of its own: every command is
/// translated into pointer events on the board (a press at a point, a
/// motion delta, a release), exactly what a windowed front end would
/// feed it. `renderer` is injected so the engine stays output-agnostic.
pub struct Game<R: Renderer> {
    board: Board,
    renderer: R,
}

impl<R: Renderer> Game<R> {
    pub fn new(board: Board, renderer: R) -> Self {
        Game { board, renderer }
    }

    /// Run the interactive game loop until the player quits.
    pub fn run(&mut self) {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        self.renderer.render(&self.board);

        loop {
            print!("> ");
            stdout.flush().unwrap();

            let mut line = String::new();
            if stdin.lock().read_line(&mut line).unwrap() == 0 {
                // EOF
                break;
            }

            match parse_command(&line) {
                Err(e) => self.renderer.error(&e),
                Ok(cmd) => {
                    if self.handle(cmd) {
                        break;
                    }
                    if self.board.is_won() {
                        self.renderer.win();
                    }
                    self.renderer.render(&self.board);
                }
            }
        }
    }

    /// Dispatch a command. Returns `true` if the game should exit.
    fn handle(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Quit => {
                self.renderer.info("Thanks for playing. Goodbye!");
                return true;
            }
            Command::Help => {
                self.renderer.help();
            }
            Command::NewGame => {
                self.board = Board::deal_random();
                self.renderer.info("A new game has been dealt.");
            }
            Command::Draw => {
                let press = self.board.on_press(layout::pile_anchor(PileId::Stock));
                let _ = self.board.on_release();
                match press {
                    PressOutcome::Drew(n) => {
                        self.renderer.info(&format!("Drew {n} card(s) to the waste."));
                    }
                    PressOutcome::Recycled(0) => {
                        self.renderer.error("The stock and the waste are both empty.");
                    }
                    PressOutcome::Recycled(n) => {
                        self.renderer
                            .info(&format!("Recycled {n} card(s) back into the stock."));
                    }
                    _ => self.renderer.error("Nothing to draw."),
                }
            }
            Command::Tap { pile, depth } => match self.board.card_from_top(pile, depth) {
                None => self.renderer.error("No card at that spot."),
                Some(id) => {
                    let press = self.board.on_press(layout::grab_point(self.board.card(id).pos));
                    match press {
                        PressOutcome::Flipped(_) => {
                            self.renderer.info("Turned the card face up.");
                        }
                        PressOutcome::Drew(n) => {
                            self.renderer.info(&format!("Drew {n} card(s) to the waste."));
                        }
                        PressOutcome::Lifted(_) => {
                            let _ = self.board.on_release();
                            self.renderer.info("That card is already face up.");
                        }
                        PressOutcome::Recycled(n) => {
                            self.renderer
                                .info(&format!("Recycled {n} card(s) back into the stock."));
                        }
                        PressOutcome::Miss => self.renderer.error("No card under that point."),
                    }
                }
            },
            Command::Move { src, depth, dst } => match self.board.card_from_top(src, depth) {
                None => self.renderer.error("No card at that spot."),
                Some(id) => {
                    let press = self.board.on_press(layout::grab_point(self.board.card(id).pos));
                    match press {
                        PressOutcome::Lifted(_) => {
                            let lead = self.board.held()[0];
                            let here = self.board.card(lead).pos;
                            let target = layout::pile_anchor(dst);
                            self.board.on_motion(target.x - here.x, target.y - here.y);
                            match self.board.on_release() {
                                ReleaseOutcome::Committed { to, count } => {
                                    self.renderer.info(&format!(
                                        "Moved {count} card(s) to {}.",
                                        to.label()
                                    ));
                                }
                                ReleaseOutcome::Restored => {
                                    self.renderer
                                        .error("That move is not allowed; cards returned.");
                                }
                                ReleaseOutcome::NoSelection => {}
                            }
                        }
                        PressOutcome::Flipped(_) => {
                            self.renderer
                                .info("That card was face down; turned it face up instead.");
                        }
                        PressOutcome::Drew(n) => {
                            self.renderer.info(&format!("Drew {n} card(s) to the waste."));
                        }
                        PressOutcome::Recycled(n) => {
                            self.renderer
                                .info(&format!("Recycled {n} card(s) back into the stock."));
                        }
                        PressOutcome::Miss => self.renderer.error("No card under that point."),
                    }
                }
            },
        }
        false
    }
}
