//! Virtual-table geometry: where each pile's mat sits and how
//! card-sized rectangles hit-test against points and mats.
//!
//! The engine never interprets raw coordinates itself; it asks this
//! module which card rectangle or mat a point falls in and which mat is
//! nearest, then resolves identities over the answers.

use crate::board::PileId;

#[allow(dead_code)]
pub const SCREEN_WIDTH: f32 = 1024.0;
pub const SCREEN_HEIGHT: f32 = 768.0;

const CARD_SCALE: f32 = 0.6;
pub const CARD_WIDTH: f32 = 140.0 * CARD_SCALE;
pub const CARD_HEIGHT: f32 = 190.0 * CARD_SCALE;

/// Mats are slightly larger than the cards they sit under.
const MAT_OVERSIZE: f32 = 1.25;
pub const MAT_WIDTH: f32 = CARD_WIDTH * MAT_OVERSIZE;
pub const MAT_HEIGHT: f32 = CARD_HEIGHT * MAT_OVERSIZE;

const VERTICAL_MARGIN: f32 = 0.10;
const HORIZONTAL_MARGIN: f32 = 0.10;

/// X of the leftmost mat column.
const START_X: f32 = MAT_WIDTH / 2.0 + MAT_WIDTH * HORIZONTAL_MARGIN;
/// Y of the bottom row (stock and waste).
const BOTTOM_Y: f32 = MAT_HEIGHT / 2.0 + MAT_HEIGHT * VERTICAL_MARGIN;
/// Y of the top row (foundations).
const TOP_Y: f32 = SCREEN_HEIGHT - MAT_HEIGHT / 2.0 - MAT_HEIGHT * VERTICAL_MARGIN;
/// Y of the middle row (tableau).
const MIDDLE_Y: f32 = TOP_Y - MAT_HEIGHT - MAT_HEIGHT * VERTICAL_MARGIN;
/// Horizontal distance between neighbouring mat centres.
const X_SPACING: f32 = MAT_WIDTH + MAT_WIDTH * HORIZONTAL_MARGIN;

/// Vertical distance between fanned cards in a tableau run.
pub const FAN_OFFSET: f32 = CARD_HEIGHT * CARD_SCALE * 0.3;

/// A point on the virtual table, y increasing upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    fn dist2(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Centre of the mat a pile sits on.
pub fn pile_anchor(pile: PileId) -> Point {
    match pile {
        PileId::Stock => Point::new(START_X, BOTTOM_Y),
        PileId::Waste => Point::new(START_X + X_SPACING, BOTTOM_Y),
        PileId::Tableau(i) => Point::new(START_X + i as f32 * X_SPACING, MIDDLE_Y),
        PileId::Foundation(i) => Point::new(START_X + i as f32 * X_SPACING, TOP_Y),
    }
}

/// Is `p` inside a card-sized rectangle centred at `centre`?
pub fn point_in_card(p: Point, centre: Point) -> bool {
    in_rect(p, centre, CARD_WIDTH, CARD_HEIGHT)
}

/// The pile whose mat contains `p`, if any. Mats never overlap.
pub fn pile_at_point(p: Point) -> Option<PileId> {
    PileId::all().find(|&pile| in_rect(p, pile_anchor(pile), MAT_WIDTH, MAT_HEIGHT))
}

/// The pile whose mat centre is closest to `p`, regardless of overlap.
pub fn nearest_pile(p: Point) -> PileId {
    PileId::all()
        .min_by(|&a, &b| {
            p.dist2(pile_anchor(a)).total_cmp(&p.dist2(pile_anchor(b)))
        })
        .expect("there is always at least one pile")
}

/// Does a card-sized rectangle centred at `card_centre` overlap `pile`'s mat?
pub fn card_overlaps_mat(card_centre: Point, pile: PileId) -> bool {
    rects_overlap(
        card_centre,
        CARD_WIDTH,
        CARD_HEIGHT,
        pile_anchor(pile),
        MAT_WIDTH,
        MAT_HEIGHT,
    )
}

/// A point on the exposed upper strip of a fanned card: inside the
/// card's own rectangle but above the top edge of a card fanned
/// `FAN_OFFSET` below it. Pressing here grabs the card itself even when
/// later cards of the run are stacked on top of it.
pub fn grab_point(card_centre: Point) -> Point {
    card_centre.offset(0.0, (CARD_HEIGHT - FAN_OFFSET) / 2.0)
}

fn in_rect(p: Point, centre: Point, w: f32, h: f32) -> bool {
    (p.x - centre.x).abs() <= w / 2.0 && (p.y - centre.y).abs() <= h / 2.0
}

fn rects_overlap(a: Point, aw: f32, ah: f32, b: Point, bw: f32, bh: f32) -> bool {
    (a.x - b.x).abs() <= (aw + bw) / 2.0 && (a.y - b.y).abs() <= (ah + bh) / 2.0
}
