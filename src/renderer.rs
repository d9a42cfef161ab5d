use crate::board::{Board, FOUNDATION_COUNT, PileId, TABLEAU_COUNT};
use crate::card::{Card, Colour};

/// Trait that abstracts the presentation layer.
///
/// Implement this trait for:
/// - `CliRenderer` – plain terminal output (current implementation)
/// - a sprite/windowed renderer driving the same board state (future)
pub trait Renderer {
    /// Render the full game board.
    fn render(&mut self, board: &Board);
    /// Display an informational message.
    fn info(&mut self, msg: &str);
    /// Display an error message.
    fn error(&mut self, msg: &str);
    /// Display the help text.
    fn help(&mut self);
    /// Display the win screen.
    fn win(&mut self);
}

// ---------------------------------------------------------------------------
// CLI Renderer
// ---------------------------------------------------------------------------

/// A simple ANSI-colour CLI renderer.
pub struct CliRenderer;

impl CliRenderer {
    pub fn new() -> Self {
        CliRenderer
    }

    fn card_str(&self, card: Card) -> String {
        match card.colour() {
            Colour::Red => format!("\x1b[31m{}\x1b[0m", card.label()),
            Colour::Black => format!("\x1b[90m{}\x1b[0m", card.label()),
        }
    }

    fn cell_str(&self, board: &Board, pile: PileId, row: usize) -> String {
        let cards = board.pile(pile);
        match cards.get(row) {
            None => "  ..  ".to_string(),
            Some(&id) => {
                let state = board.card(id);
                if state.face_up {
                    format!(" [{}] ", self.card_str(state.card))
                } else {
                    " [##] ".to_string()
                }
            }
        }
    }
}

impl Renderer for CliRenderer {
    fn render(&mut self, board: &Board) {
        println!();

        // ---- Top row: stock | waste | foundations ----
        let stock_len = board.pile(PileId::Stock).len();
        if stock_len == 0 {
            print!("  STOCK: [  ]     ");
        } else {
            print!("  STOCK: [##] x{stock_len:<2} ");
        }

        let waste = board.pile(PileId::Waste);
        match waste.last() {
            None => print!("  WASTE: [  ]     "),
            Some(&id) => print!(
                "  WASTE: [{}] x{:<2}",
                self.card_str(board.card(id).card),
                waste.len()
            ),
        }

        print!("  FOUND: ");
        for i in 0..FOUNDATION_COUNT {
            match board.pile(PileId::Foundation(i)).last() {
                None => print!("{}:[--] ", i + 1),
                Some(&id) => print!("{}:[{}] ", i + 1, self.card_str(board.card(id).card)),
            }
        }
        println!();

        // ---- Tableau ----
        println!();
        print!("  COL:   ");
        for i in 1..=TABLEAU_COUNT {
            print!("  t{i:<3}");
        }
        println!();

        let max_len = (0..TABLEAU_COUNT)
            .map(|i| board.pile(PileId::Tableau(i)).len())
            .max()
            .unwrap_or(0);

        for row in 0..max_len {
            print!("  {row:>3}:   ");
            for i in 0..TABLEAU_COUNT {
                print!("{}", self.cell_str(board, PileId::Tableau(i), row));
            }
            println!();
        }

        if max_len == 0 {
            println!("  (all tableau piles empty)");
        }

        println!();
    }

    fn info(&mut self, msg: &str) {
        println!("\x1b[36m[INFO]\x1b[0m {msg}");
    }

    fn error(&mut self, msg: &str) {
        println!("\x1b[31m[ERR ]\x1b[0m {msg}");
    }

    fn help(&mut self) {
        println!(
            r#"
╔══════════════════════════════════════════════════════════════╗
║              Klondike Solitaire – CLI Help                   ║
╠══════════════════════════════════════════════════════════════╣
║  LAYOUT: stock (s), waste (w), seven tableau piles (t1-t7)   ║
║  and four foundation piles (f1-f4).                          ║
║                                                              ║
║  RULES (house variant):                                      ║
║    · Click the stock to draw three cards to the waste;       ║
║      when the stock runs out, the same click recycles the    ║
║      waste back into it.                                     ║
║    · Any face-up card, with everything stacked on it, may    ║
║      be dropped on any tableau pile.                         ║
║    · Foundations accept exactly one card per drop.           ║
║    · Click a face-down tableau card to turn it over.         ║
╠══════════════════════════════════════════════════════════════╣
║  COMMANDS (case-insensitive):                                ║
║                                                              ║
║  draw | d                Click the stock                     ║
║  move <src>[:N] <dst>    Drag the card N from the top of     ║
║                          src (0=top) onto dst                ║
║  tap  <pile>[:N]         Click a card in place (flip)        ║
║  new                     Start a new random game             ║
║  quit                    Exit                                ║
║  help | h | ?            Show this help                      ║
╠══════════════════════════════════════════════════════════════╣
║  Example: move t4:2 t7  →  drag the top 3 cards of t4 to t7  ║
╚══════════════════════════════════════════════════════════════╝
"#
        );
    }

    fn win(&mut self) {
        println!(
            "\n\x1b[33m\
            \n  ╦ ╦╔═╗╦ ╦  ╦ ╦╦╔╗╔\
            \n  ╚╦╝║ ║║ ║  ║║║║║║║\
            \n   ╩ ╚═╝╚═╝  ╚╩╝╩╝╚╝\
            \n\x1b[0m\
            \n  Every card made it home. Type 'new' for another deal.\n"
        );
    }
}
