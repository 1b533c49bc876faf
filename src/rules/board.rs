//! Board rules: scoring, charge, placement legality and resolution.
//!
//! The board is a [`Grid`] plus a [`BoardCount`] that is always a pure
//! recomputation of that grid. Nothing mutates a count directly; every
//! board-producing operation goes through [`get_board_state`].

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::movement::CardPlacement;
use crate::cards::{rotate, Card, CardCatalog, Rotation};
use crate::core::grid::{Coord, Grid};
use crate::core::player::{PlayerId, PlayerPair};
use crate::core::space::{self, Space, EIGHT_NEIGHBOURS, EMPTY, NEUTRAL, SPECIAL, TRIVIAL};

/// Covered cells of a placed card: board position and ink tier.
pub type Footprint = SmallVec<[(Coord, Space); 64]>;

/// Per-player aggregates derived from a board grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardCount {
    /// Cells holding the player's trivial or special ink.
    pub area: PlayerPair<u32>,
    /// Charged special cells owned by the player.
    pub special: PlayerPair<u32>,
}

/// A board grid with its derived counts.
///
/// Serializes as the bare grid; the count is rebuilt on deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Grid", into = "Grid")]
pub struct BoardState {
    grid: Grid,
    count: BoardCount,
}

impl BoardState {
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn count(&self) -> &BoardCount {
        &self.count
    }

    /// Consume into the bare grid.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

impl From<Grid> for BoardState {
    fn from(grid: Grid) -> Self {
        get_board_state(grid)
    }
}

impl From<BoardState> for Grid {
    fn from(board: BoardState) -> Self {
        board.grid
    }
}

// =============================================================================
// Scoring
// =============================================================================

/// Wrap a grid with freshly computed counts.
///
/// Every trivial or special cell adds one to its owner's area; every charged
/// special cell adds one to its owner's special count. Neutral and invalid
/// cells never count.
#[must_use]
pub fn get_board_state(grid: Grid) -> BoardState {
    let mut count = BoardCount::default();
    for (pos, v) in grid.iter() {
        let Some(owner) = space::owner(v) else {
            continue;
        };
        count.area[owner] += 1;
        if space::tier(v) == SPECIAL && is_board_pos_charged(&grid, pos) {
            count.special[owner] += 1;
        }
    }
    BoardState { grid, count }
}

/// Whether the special cell at `pos` is charged: every in-board neighbour
/// holds something other than `EMPTY`.
///
/// Non-special cells are never charged. Panics if `pos` is out of range.
#[must_use]
pub fn is_board_pos_charged(board: &Grid, pos: Coord) -> bool {
    if space::tier(board.get(pos)) != SPECIAL {
        return false;
    }
    EIGHT_NEIGHBOURS.iter().all(|&(dx, dy)| {
        let n = pos.offset(dx, dy);
        !board.is_in_board(n) || board.get(n) != EMPTY
    })
}

// =============================================================================
// Footprints
// =============================================================================

/// Inked cells of an already-rotated card pattern, translated to `position`.
///
/// Cells falling outside the board are included, except those whose
/// coordinate would overflow `i32`.
#[must_use]
pub fn pattern_footprint(pattern: &Grid, position: Coord) -> Footprint {
    pattern
        .iter_non_empty()
        .filter_map(|(p, v)| Some((p.checked_add(position)?, v)))
        .collect()
}

/// Inked cells of `card` placed with `rotation` at `position`.
#[must_use]
pub fn footprint(card: &Card, rotation: Rotation, position: Coord) -> Footprint {
    pattern_footprint(&rotate(card, rotation), position)
}

/// Whether two footprints cover a common cell.
#[must_use]
pub fn footprints_overlap(a: &Footprint, b: &Footprint) -> bool {
    let cells: FxHashSet<Coord> = a.iter().map(|&(p, _)| p).collect();
    b.iter().any(|(p, _)| cells.contains(p))
}

// =============================================================================
// Legality
// =============================================================================

/// Legality of a pre-rotated pattern. The enumerator calls this directly to
/// avoid rotating the same card once per candidate position.
pub(crate) fn is_pattern_move_valid(
    board: &Grid,
    player: PlayerId,
    pattern: &Grid,
    position: Coord,
    special: bool,
) -> bool {
    let sign = player.turn_sign();
    let mut neighbour = false;

    for (offset, _) in pattern.iter_non_empty() {
        let Some(pos) = offset.checked_add(position) else {
            return false;
        };
        if !board.is_in_board(pos) {
            return false;
        }
        let current = board.get(pos);
        let paintable = if special {
            space::tier(current) <= TRIVIAL
        } else {
            current == EMPTY
        };
        if !paintable {
            return false;
        }
        if !neighbour {
            neighbour = EIGHT_NEIGHBOURS.iter().any(|&(dx, dy)| {
                let n = pos.offset(dx, dy);
                if !board.is_in_board(n) {
                    return false;
                }
                let own = board.get(n) * sign;
                own == SPECIAL || (!special && own == TRIVIAL)
            });
        }
    }

    neighbour
}

/// Whether `placement` may be painted onto `board`.
///
/// Every covered cell must be in-board and paintable: `EMPTY` for a trivial
/// placement, anything up to trivial ink (either owner) for a special
/// attack. At least one covered cell must touch the player's own special
/// ink, or own trivial ink for a trivial placement.
///
/// Unknown cards are never valid.
#[must_use]
pub fn is_board_move_valid(
    cards: &CardCatalog,
    board: &BoardState,
    placement: &CardPlacement,
    special: bool,
) -> bool {
    let Some(card) = cards.get(placement.card) else {
        return false;
    };
    is_pattern_move_valid(
        &board.grid,
        placement.player,
        &rotate(card, placement.rotation),
        placement.position,
        special,
    )
}

// =============================================================================
// Resolution
// =============================================================================

/// Paint one batch of placements and return the recomputed board.
///
/// Placements are applied in order onto a single copy of the board. A cell
/// painted a second time within the batch with the same tier it already
/// holds turns `NEUTRAL`. Otherwise ink is written only when its tier is at
/// least the tier already there. Covered cells off the board are skipped.
///
/// Panics on an unknown card, on more than two placements, or when both
/// placements belong to the same player.
#[must_use]
pub fn move_board(
    cards: &CardCatalog,
    board: &BoardState,
    placements: &[CardPlacement],
) -> BoardState {
    assert!(
        placements.len() <= 2,
        "at most two placements per batch, got {}",
        placements.len()
    );
    if let [a, b] = placements {
        assert_ne!(a.player, b.player, "both placements belong to {}", a.player);
    }

    let mut grid = board.grid.clone();
    let mut visited: FxHashSet<Coord> = FxHashSet::default();

    for placement in placements {
        let card = cards
            .get(placement.card)
            .unwrap_or_else(|| panic!("{} is not in the catalog", placement.card));

        for (pos, incoming) in footprint(card, placement.rotation, placement.position) {
            if !grid.is_in_board(pos) {
                continue;
            }
            let existing = space::tier(grid.get(pos));
            let value = if !visited.insert(pos) && incoming == existing {
                NEUTRAL
            } else {
                space::signed(incoming, placement.player)
            };
            if incoming >= existing {
                grid.set(pos, value);
            }
        }
    }

    get_board_state(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Rarity};
    use crate::stages::parse_grid;

    fn card(id: u32, pattern: &str) -> Card {
        Card::new(
            CardId::new(id),
            format!("c{id}"),
            Rarity::Common,
            parse_grid(pattern).unwrap(),
            1,
        )
    }

    /// Single trivial cell in the top-left corner of the box.
    fn dot_catalog() -> CardCatalog {
        CardCatalog::from_cards([
            card(
                1,
                "a.......\n........\n........\n........\n........\n........\n........\n........\n",
            ),
            card(
                2,
                "A.......\n........\n........\n........\n........\n........\n........\n........\n",
            ),
        ])
        .unwrap()
    }

    fn board(text: &str) -> BoardState {
        get_board_state(parse_grid(text).unwrap())
    }

    fn place(player: u8, card: u32, x: i32, y: i32) -> CardPlacement {
        CardPlacement::new(
            PlayerId::new(player),
            CardId::new(card),
            Rotation::new(0),
            Coord::new(x, y),
        )
    }

    #[test]
    fn test_counts() {
        let b = board(
            "
            aaa.
            aAa.
            aaab
            #@.B
            ",
        );
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(b.count().area[p0], 9);
        assert_eq!(b.count().area[p1], 2);
        assert_eq!(b.count().special[p0], 1);
        // (3, 3) has an empty neighbour at (2, 3).
        assert_eq!(b.count().special[p1], 0);
    }

    #[test]
    fn test_charge_ignores_invalid_neighbours() {
        let b = board("@@@\n@B@\n@@@\n");
        assert!(is_board_pos_charged(b.grid(), Coord::new(1, 1)));
        assert_eq!(b.count().special[PlayerId::new(1)], 1);
    }

    #[test]
    fn test_charge_requires_special() {
        let b = board("aaa\naaa\naaa\n");
        assert!(!is_board_pos_charged(b.grid(), Coord::new(1, 1)));
    }

    #[test]
    fn test_trivial_needs_own_neighbour() {
        let cards = dot_catalog();
        let b = board(
            "
            a...
            ....
            ...b
            ",
        );

        assert!(is_board_move_valid(&cards, &b, &place(0, 1, 1, 1), false));
        assert!(!is_board_move_valid(&cards, &b, &place(0, 1, 2, 1), false));
        assert!(is_board_move_valid(&cards, &b, &place(1, 1, 2, 1), false));
    }

    #[test]
    fn test_trivial_rejects_occupied_and_off_board() {
        let cards = dot_catalog();
        let b = board("a.@\n...\n");

        assert!(!is_board_move_valid(&cards, &b, &place(0, 1, 0, 0), false));
        assert!(!is_board_move_valid(&cards, &b, &place(0, 1, 2, 0), false));
        assert!(!is_board_move_valid(&cards, &b, &place(0, 1, -1, 0), false));
    }

    #[test]
    fn test_special_may_cover_trivial_ink() {
        let cards = dot_catalog();
        let b = board("Ab.\n...\n");

        assert!(is_board_move_valid(&cards, &b, &place(0, 1, 1, 0), true));
        assert!(!is_board_move_valid(&cards, &b, &place(0, 1, 1, 0), false));
    }

    #[test]
    fn test_unknown_card_is_invalid() {
        let cards = dot_catalog();
        let b = board("A..\n");
        assert!(!is_board_move_valid(&cards, &b, &place(0, 77, 1, 0), false));
    }

    #[test]
    fn test_move_board_paints_and_recounts() {
        let cards = dot_catalog();
        let b = board("A..\n...\n");
        let next = move_board(&cards, &b, &[place(0, 1, 1, 0)]);

        assert_eq!(next.grid().get(Coord::new(1, 0)), TRIVIAL);
        assert_eq!(next.count().area[PlayerId::new(0)], 2);
        // Input board untouched.
        assert_eq!(b.grid().get(Coord::new(1, 0)), EMPTY);
    }

    #[test]
    fn test_same_tier_contest_is_neutral() {
        let cards = dot_catalog();
        let b = board("A.B\n");
        let next = move_board(&cards, &b, &[place(0, 1, 1, 0), place(1, 1, 1, 0)]);

        assert_eq!(next.grid().get(Coord::new(1, 0)), NEUTRAL);
        assert_eq!(next.count().area, PlayerPair::from_array([1, 1]));
    }

    #[test]
    fn test_special_beats_trivial_in_contest() {
        let cards = dot_catalog();
        let b = board("A.B\n");

        let next = move_board(&cards, &b, &[place(0, 1, 1, 0), place(1, 2, 1, 0)]);
        assert_eq!(next.grid().get(Coord::new(1, 0)), -SPECIAL);

        let next = move_board(&cards, &b, &[place(1, 2, 1, 0), place(0, 1, 1, 0)]);
        assert_eq!(next.grid().get(Coord::new(1, 0)), -SPECIAL);
    }

    #[test]
    fn test_off_board_cells_skipped() {
        let cards = CardCatalog::from_cards([card(
            3,
            "aa......\n........\n........\n........\n........\n........\n........\n........\n",
        )])
        .unwrap();
        let b = board("@A.\n");
        let next = move_board(&cards, &b, &[place(0, 3, -1, 0)]);

        assert_eq!(next.grid(), b.grid());
    }

    #[test]
    fn test_extreme_positions_are_invalid() {
        let cards = CardCatalog::from_cards([card(
            3,
            "aa......\n........\n........\n........\n........\n........\n........\n........\n",
        )])
        .unwrap();
        let b = board("A..\n...\n");

        for (x, y) in [(i32::MAX, 0), (0, i32::MAX), (i32::MIN, 0), (i32::MAX, i32::MIN)] {
            let far = place(0, 3, x, y);
            assert!(!is_board_move_valid(&cards, &b, &far, false));
            assert!(!is_board_move_valid(&cards, &b, &far, true));
            assert_eq!(move_board(&cards, &b, &[far]), b);
        }

        let c = cards.get(CardId::new(3)).unwrap();
        let cells = footprint(c, Rotation::new(0), Coord::new(i32::MAX, 0));
        assert_eq!(cells.len(), 1);
    }

    #[test]
    #[should_panic(expected = "both placements belong to")]
    fn test_same_player_twice_panics() {
        let cards = dot_catalog();
        let b = board("A..\n");
        let _ = move_board(&cards, &b, &[place(0, 1, 1, 0), place(0, 1, 2, 0)]);
    }

    #[test]
    fn test_footprints_overlap() {
        let cards = dot_catalog();
        let c = cards.get(CardId::new(1)).unwrap();
        let a = footprint(c, Rotation::new(0), Coord::new(2, 2));
        let b = footprint(c, Rotation::new(0), Coord::new(2, 2));
        let other = footprint(c, Rotation::new(0), Coord::new(3, 2));

        assert!(footprints_overlap(&a, &b));
        assert!(!footprints_overlap(&a, &other));
    }

    #[test]
    fn test_board_serializes_as_grid() {
        let b = board("aA.\nbbB\n");
        let json = serde_json::to_string(&b).unwrap();
        let back: BoardState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }
}
