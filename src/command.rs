use crate::board::{FOUNDATION_COUNT, PileId, TABLEAU_COUNT};

/// All commands a player can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click the stock: draw up to three cards, or recycle the waste
    /// when the stock is out.
    Draw,
    /// Drag the card `depth` from the top of `src` (and every card
    /// above it) onto `dst`'s mat.
    Move {
        src: PileId,
        depth: usize,
        dst: PileId,
    },
    /// Press and release in place; turns a face-down card face up.
    Tap { pile: PileId, depth: usize },
    /// Restart with a fresh shuffle.
    NewGame,
    /// Quit the game.
    Quit,
    /// Print help.
    Help,
}

/// Parse a single line of text input into a `Command`.
///
/// Syntax reference (case-insensitive):
/// ```text
/// draw                      -- Draw from the stock / recycle the waste
/// move <src>[:N] <dst>      -- Drag a card (N from the top, 0=top) to dst
/// tap <pile>[:N]            -- Click a card in place (flips face-down)
/// new                       -- New game
/// quit | q                  -- Quit
/// help | h | ?              -- Help
/// ```
/// Piles are named `s` (stock), `w` (waste), `t1`..`t7`, `f1`..`f4`.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }

    let tokens: Vec<&str> = input.split_whitespace().collect();
    let cmd = tokens[0].to_lowercase();

    match cmd.as_str() {
        "draw" | "d" => Ok(Command::Draw),
        "move" | "m" => {
            if tokens.len() < 3 {
                return Err("Usage: move <src>[:<depth>] <dst>".to_string());
            }
            let (src, depth) = parse_spot(tokens[1])?;
            let dst = parse_pile(tokens[2])?;
            Ok(Command::Move { src, depth, dst })
        }
        "tap" | "flip" => {
            if tokens.len() < 2 {
                return Err("Usage: tap <pile>[:<depth>]".to_string());
            }
            let (pile, depth) = parse_spot(tokens[1])?;
            Ok(Command::Tap { pile, depth })
        }
        "new" | "n" => Ok(Command::NewGame),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        "help" | "h" | "?" => Ok(Command::Help),
        _ => Err(format!("Unknown command '{}'. Type 'help' for help.", tokens[0])),
    }
}

/// Parse `<pile>` or `<pile>:<depth>` (depth counted from the top, 0 = top).
fn parse_spot(s: &str) -> Result<(PileId, usize), String> {
    if let Some((pile_part, depth_part)) = s.split_once(':') {
        let pile = parse_pile(pile_part)?;
        let depth: usize = depth_part
            .parse()
            .map_err(|_| format!("'{depth_part}' is not a valid depth"))?;
        Ok((pile, depth))
    } else {
        Ok((parse_pile(s)?, 0))
    }
}

fn parse_pile(s: &str) -> Result<PileId, String> {
    let s = s.to_lowercase();
    match s.as_str() {
        "s" | "stock" => return Ok(PileId::Stock),
        "w" | "waste" => return Ok(PileId::Waste),
        _ => {}
    }
    if let Some(rest) = s.strip_prefix('t') {
        let n: usize = rest
            .parse()
            .map_err(|_| format!("'{s}' is not a valid pile name"))?;
        if n == 0 || n > TABLEAU_COUNT {
            return Err(format!("Tableau index {n} out of range (1–{TABLEAU_COUNT})"));
        }
        return Ok(PileId::Tableau(n - 1));
    }
    if let Some(rest) = s.strip_prefix('f') {
        let n: usize = rest
            .parse()
            .map_err(|_| format!("'{s}' is not a valid pile name"))?;
        if n == 0 || n > FOUNDATION_COUNT {
            return Err(format!(
                "Foundation index {n} out of range (1–{FOUNDATION_COUNT})"
            ));
        }
        return Ok(PileId::Foundation(n - 1));
    }
    Err(format!(
        "'{s}' is not a valid pile name. Use s, w, t1-t{TABLEAU_COUNT}, or f1-f{FOUNDATION_COUNT}."
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_draw_and_aliases() {
        assert_eq!(parse_command("draw"), Ok(Command::Draw));
        assert_eq!(parse_command("  d  "), Ok(Command::Draw));
    }

    #[test]
    fn parses_moves_with_and_without_depth() {
        assert_eq!(
            parse_command("move t3 f1"),
            Ok(Command::Move {
                src: PileId::Tableau(2),
                depth: 0,
                dst: PileId::Foundation(0),
            })
        );
        assert_eq!(
            parse_command("m w:0 t7"),
            Ok(Command::Move {
                src: PileId::Waste,
                depth: 0,
                dst: PileId::Tableau(6),
            })
        );
        assert_eq!(
            parse_command("M T2:3 T5"),
            Ok(Command::Move {
                src: PileId::Tableau(1),
                depth: 3,
                dst: PileId::Tableau(4),
            })
        );
    }

    #[test]
    fn parses_tap() {
        assert_eq!(
            parse_command("tap t4"),
            Ok(Command::Tap {
                pile: PileId::Tableau(3),
                depth: 0,
            })
        );
        assert_eq!(
            parse_command("flip t1:1"),
            Ok(Command::Tap {
                pile: PileId::Tableau(0),
                depth: 1,
            })
        );
    }

    #[test]
    fn parses_control_commands() {
        assert_eq!(parse_command("new"), Ok(Command::NewGame));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("?"), Ok(Command::Help));
    }

    #[test]
    fn rejects_nonsense() {
        assert!(parse_command("").is_err());
        assert!(parse_command("juggle").is_err());
        assert!(parse_command("move t3").is_err());
        assert!(parse_command("move t9 f1").is_err());
        assert!(parse_command("move t0 f1").is_err());
        assert!(parse_command("move x2 f1").is_err());
        assert!(parse_command("move t2:x f1").is_err());
        assert!(parse_command("move t2 f5").is_err());
    }
}
