use rand::SeedableRng;
use rand::seq::SliceRandom;

use crate::card::{Card, full_deck};
use crate::layout::{self, Point};

/// Number of tableau piles.
pub const TABLEAU_COUNT: usize = 7;
/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;
/// Total pile count: stock, waste, tableau, foundations.
pub const PILE_COUNT: usize = 2 + TABLEAU_COUNT + FOUNDATION_COUNT;
/// Cards moved to the waste per draw, stock permitting.
pub const DRAW_BATCH: usize = 3;

/// The fixed role of one of the thirteen piles. Roles never change for
/// the lifetime of a game; only pile membership does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileId {
    /// Face-down draw pile.
    Stock,
    /// Face-up pile receiving drawn cards.
    Waste,
    /// One of the seven build piles (0-indexed).
    Tableau(usize),
    /// One of the four completion piles (0-indexed).
    Foundation(usize),
}

impl PileId {
    /// Stable array index in 0..PILE_COUNT.
    pub fn index(self) -> usize {
        match self {
            PileId::Stock => 0,
            PileId::Waste => 1,
            PileId::Tableau(i) => 2 + i,
            PileId::Foundation(i) => 2 + TABLEAU_COUNT + i,
        }
    }

    pub fn from_index(index: usize) -> PileId {
        match index {
            0 => PileId::Stock,
            1 => PileId::Waste,
            i if i < 2 + TABLEAU_COUNT => PileId::Tableau(i - 2),
            i if i < PILE_COUNT => PileId::Foundation(i - 2 - TABLEAU_COUNT),
            i => panic!("pile index {i} out of range"),
        }
    }

    /// All thirteen piles in index order.
    pub fn all() -> impl Iterator<Item = PileId> {
        (0..PILE_COUNT).map(PileId::from_index)
    }

    /// Human-readable name used in CLI messages.
    pub fn label(self) -> String {
        match self {
            PileId::Stock => "the stock".to_string(),
            PileId::Waste => "the waste".to_string(),
            PileId::Tableau(i) => format!("tableau {}", i + 1),
            PileId::Foundation(i) => format!("foundation {}", i + 1),
        }
    }
}

/// Identity of one of the 52 cards, an index into the board's card slab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(usize);

/// Per-card mutable state: orientation and table position on top of the
/// immutable (suit, rank) identity.
#[derive(Debug, Clone)]
pub struct CardState {
    pub card: Card,
    pub face_up: bool,
    pub pos: Point,
}

/// What a press at a point did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// The stock was pressed; this many cards moved to the waste.
    Drew(usize),
    /// The empty stock mat was pressed; this many waste cards recycled.
    Recycled(usize),
    /// A face-down tableau card was turned face up in place.
    Flipped(CardId),
    /// This many cards were lifted as the held selection.
    Lifted(usize),
    /// Nothing under the point; no state change.
    Miss,
}

/// What a release did with the held selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The selection was appended to `to`.
    Committed { to: PileId, count: usize },
    /// The drop was illegal; every held card went back where it was.
    Restored,
    /// Nothing was held.
    NoSelection,
}

/// The game board – the single source of truth for all game state.
///
/// Held cards stay members of their origin pile until a drop commits,
/// so every card is in exactly one pile at all times.
#[derive(Debug, Clone)]
pub struct Board {
    /// Card slab, indexed by `CardId`.
    cards: Vec<CardState>,
    /// The thirteen piles, each bottom-to-top.
    piles: [Vec<CardId>; PILE_COUNT],
    /// Draw order, back-to-front. Fed to sprite-style front ends.
    z_order: Vec<CardId>,
    /// Cards currently lifted by the player, bottom-to-top.
    held: Vec<CardId>,
    /// Pre-lift position of each held card, parallel to `held`.
    held_origin: Vec<Point>,
}

impl Board {
    // -------------------------------------------------------------------------
    // Construction / Dealing
    // -------------------------------------------------------------------------

    /// Deal a fresh shuffled board using an OS-random seed.
    pub fn deal_random() -> Self {
        let mut rng = rand::rngs::SmallRng::from_os_rng();
        let mut deck = full_deck();
        deck.shuffle(&mut rng);
        Self::deal_from_deck(deck)
    }

    /// Deal a board from a specific seed (useful for reproducible games).
    pub fn deal_seeded(seed: u64) -> Self {
        let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
        let mut deck = full_deck();
        deck.shuffle(&mut rng);
        Self::deal_from_deck(deck)
    }

    /// Deal a board from an already-ordered deck (for testing).
    ///
    /// Tableau pile i receives i+1 cards popped from the stock, all
    /// face-down except the last; the remaining 24 stay on the stock.
    pub fn deal_from_deck(deck: Vec<Card>) -> Self {
        assert_eq!(deck.len(), 52, "Need exactly 52 cards to deal");

        let stock_anchor = layout::pile_anchor(PileId::Stock);
        let cards: Vec<CardState> = deck
            .into_iter()
            .map(|card| CardState {
                card,
                face_up: false,
                pos: stock_anchor,
            })
            .collect();

        let mut board = Board {
            z_order: (0..cards.len()).map(CardId).collect(),
            cards,
            piles: Default::default(),
            held: Vec::new(),
            held_origin: Vec::new(),
        };
        board.piles[PileId::Stock.index()] = board.z_order.clone();

        for i in 0..TABLEAU_COUNT {
            let dest = PileId::Tableau(i);
            let anchor = layout::pile_anchor(dest);
            for _ in 0..=i {
                let id = board.piles[PileId::Stock.index()]
                    .pop()
                    .expect("the stock holds enough cards for the deal");
                board.cards[id.0].pos = anchor;
                board.piles[dest.index()].push(id);
                board.pull_to_front(id);
            }
            let top = *board.piles[dest.index()]
                .last()
                .expect("tableau pile was just dealt");
            board.cards[top.0].face_up = true;
        }

        board
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The ordered contents of a pile, bottom-to-top.
    pub fn pile(&self, pile: PileId) -> &[CardId] {
        &self.piles[pile.index()]
    }

    pub fn card(&self, id: CardId) -> &CardState {
        &self.cards[id.0]
    }

    /// Which pile holds this card. Held cards still answer with their
    /// origin pile.
    pub fn pile_of(&self, id: CardId) -> PileId {
        PileId::all()
            .find(|&p| self.piles[p.index()].contains(&id))
            .expect("every card belongs to exactly one pile")
    }

    /// The card `depth` places from the top of a pile (0 = top).
    pub fn card_from_top(&self, pile: PileId, depth: usize) -> Option<CardId> {
        let cards = self.pile(pile);
        cards.len().checked_sub(1 + depth).map(|i| cards[i])
    }

    /// Cards currently lifted by the player, bottom-to-top.
    pub fn held(&self) -> &[CardId] {
        &self.held
    }

    /// Back-to-front draw order for sprite-style front ends.
    #[allow(dead_code)]
    pub fn draw_order(&self) -> &[CardId] {
        &self.z_order
    }

    /// The game is won once every card sits on a foundation.
    pub fn is_won(&self) -> bool {
        (0..FOUNDATION_COUNT)
            .map(|i| self.pile(PileId::Foundation(i)).len())
            .sum::<usize>()
            == 52
    }

    /// The topmost card (by draw order) whose rectangle contains `p`.
    pub fn card_at_point(&self, p: Point) -> Option<CardId> {
        self.z_order
            .iter()
            .rev()
            .find(|&&id| layout::point_in_card(p, self.cards[id.0].pos))
            .copied()
    }

    // -------------------------------------------------------------------------
    // Stock / Waste cycling
    // -------------------------------------------------------------------------

    /// Move up to `DRAW_BATCH` cards from the stock top to the waste,
    /// flipping each face-up. Returns how many moved (0 on empty stock).
    pub fn draw_from_stock(&mut self) -> usize {
        let waste_anchor = layout::pile_anchor(PileId::Waste);
        let mut moved = 0;
        for _ in 0..DRAW_BATCH {
            let Some(id) = self.piles[PileId::Stock.index()].pop() else {
                break;
            };
            self.cards[id.0].face_up = true;
            self.cards[id.0].pos = waste_anchor;
            self.piles[PileId::Waste.index()].push(id);
            self.pull_to_front(id);
            moved += 1;
        }
        moved
    }

    /// Move the whole waste back onto the empty stock, face-down, so the
    /// rebuilt stock is the reverse of the waste's prior top-to-bottom
    /// order. No-op unless the stock is empty and the waste is not.
    pub fn recycle_waste(&mut self) -> usize {
        if !self.piles[PileId::Stock.index()].is_empty()
            || self.piles[PileId::Waste.index()].is_empty()
        {
            return 0;
        }
        let stock_anchor = layout::pile_anchor(PileId::Stock);
        let mut moved = 0;
        while let Some(id) = self.piles[PileId::Waste.index()].pop() {
            self.cards[id.0].face_up = false;
            self.cards[id.0].pos = stock_anchor;
            self.piles[PileId::Stock.index()].push(id);
            moved += 1;
        }
        moved
    }

    // -------------------------------------------------------------------------
    // Pointer events
    // -------------------------------------------------------------------------

    /// A press at `p`. Dispatches on what sits under the point: the
    /// stock draws, a face-down card flips, a face-up card lifts itself
    /// and everything above it as the held selection, and the bare
    /// stock mat recycles the waste once the stock is out.
    pub fn on_press(&mut self, p: Point) -> PressOutcome {
        if let Some(id) = self.card_at_point(p) {
            let pile = self.pile_of(id);
            if pile == PileId::Stock {
                return PressOutcome::Drew(self.draw_from_stock());
            }
            if !self.cards[id.0].face_up {
                self.cards[id.0].face_up = true;
                return PressOutcome::Flipped(id);
            }

            let in_pile = self.pile(pile);
            let start = in_pile
                .iter()
                .position(|&c| c == id)
                .expect("pressed card is in its pile");
            let run: Vec<CardId> = in_pile[start..].to_vec();
            for &c in &run {
                self.held_origin.push(self.cards[c.0].pos);
                self.pull_to_front(c);
            }
            self.held = run;
            return PressOutcome::Lifted(self.held.len());
        }

        if let Some(pile) = layout::pile_at_point(p) {
            if pile == PileId::Stock && self.piles[PileId::Stock.index()].is_empty() {
                return PressOutcome::Recycled(self.recycle_waste());
            }
        }

        PressOutcome::Miss
    }

    /// Pointer motion while dragging: every held card moves by the same
    /// delta, keeping relative offsets. No legality involved.
    pub fn on_motion(&mut self, dx: f32, dy: f32) {
        for &id in &self.held {
            let pos = &mut self.cards[id.0].pos;
            pos.x += dx;
            pos.y += dy;
        }
    }

    /// A release. Picks the pile nearest the first held card, requires
    /// geometric overlap with its mat, then applies the drop rules:
    /// origin itself and stock/waste always reject, a tableau accepts
    /// any run, a foundation accepts exactly one card. Rejection
    /// restores every held card to its pre-lift position; either way
    /// the selection is cleared.
    pub fn on_release(&mut self) -> ReleaseOutcome {
        if self.held.is_empty() {
            return ReleaseOutcome::NoSelection;
        }

        let lead = self.held[0];
        let lead_pos = self.cards[lead.0].pos;
        let dest = layout::nearest_pile(lead_pos);

        let mut accepted = false;
        if layout::card_overlaps_mat(lead_pos, dest) && dest != self.pile_of(lead) {
            match dest {
                PileId::Tableau(_) => {
                    // Fan the run downward from the current top card, or
                    // from the mat anchor when the pile is empty.
                    match self.piles[dest.index()].last().copied() {
                        Some(top) => {
                            let base = self.cards[top.0].pos;
                            for (i, &id) in self.held.iter().enumerate() {
                                self.cards[id.0].pos = Point::new(
                                    base.x,
                                    base.y - layout::FAN_OFFSET * (i as f32 + 1.0),
                                );
                            }
                        }
                        None => {
                            let base = layout::pile_anchor(dest);
                            for (i, &id) in self.held.iter().enumerate() {
                                self.cards[id.0].pos =
                                    Point::new(base.x, base.y - layout::FAN_OFFSET * i as f32);
                            }
                        }
                    }
                    accepted = true;
                }
                PileId::Foundation(_) if self.held.len() == 1 => {
                    self.cards[lead.0].pos = layout::pile_anchor(dest);
                    accepted = true;
                }
                _ => {}
            }
        }

        let outcome = if accepted {
            let run = std::mem::take(&mut self.held);
            for &id in &run {
                self.remove_from_pile(id);
                self.piles[dest.index()].push(id);
            }
            ReleaseOutcome::Committed {
                to: dest,
                count: run.len(),
            }
        } else {
            for (&id, &origin) in self.held.iter().zip(self.held_origin.iter()) {
                self.cards[id.0].pos = origin;
            }
            self.held.clear();
            ReleaseOutcome::Restored
        };
        self.held_origin.clear();
        outcome
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    fn pull_to_front(&mut self, id: CardId) {
        if let Some(i) = self.z_order.iter().position(|&c| c == id) {
            self.z_order.remove(i);
        }
        self.z_order.push(id);
    }

    fn remove_from_pile(&mut self, id: CardId) {
        for pile in self.piles.iter_mut() {
            if let Some(i) = pile.iter().position(|&c| c == id) {
                pile.remove(i);
                return;
            }
        }
    }
}
