//! Property-based tests using proptest.

use crate::board::{generate_moves, Board, PieceId, PieceKind, Side, Square};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop::sample::select(Side::BOTH.to_vec())
}

/// Pick a random piece of the side to move that has a destination, and one
/// of its destinations.
fn random_move(board: &Board, rng: &mut StdRng) -> Option<(PieceId, Square)> {
    let side = board.side_to_move();
    let movable: Vec<(PieceId, Vec<Square>)> = board
        .pieces_of(side)
        .map(|(id, _)| (id, board.moves_for(id).as_slice().to_vec()))
        .filter(|(_, moves)| !moves.is_empty())
        .collect();
    let (id, moves) = movable.choose(rng)?;
    let to = *moves.choose(rng)?;
    Some((*id, to))
}

/// Play up to `num_moves` random moves from the starting position.
fn random_board(seed: u64, num_moves: usize) -> Board {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let Some((id, to)) = random_move(&board, &mut rng) else {
            break;
        };
        board.commit_move(id, to).unwrap();
    }
    board
}

proptest! {
    /// Property: on-board test is exactly the coordinate range check
    #[test]
    fn prop_on_board_is_range_check(file in -20i8..20, rank in -20i8..20) {
        let board = Board::empty();
        let expected = (0..8).contains(&file) && (0..8).contains(&rank);
        prop_assert_eq!(board.is_on_board(Square(file, rank)), expected);
    }

    /// Property: destinations are on the board and never hold an own piece
    #[test]
    fn prop_destinations_are_landable(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_board(seed, num_moves);
        for (_, piece) in board.pieces() {
            for sq in board.moves_of(&piece).iter() {
                prop_assert!(board.is_on_board(*sq));
                prop_assert!(board.piece_at(*sq).map_or(true, |p| p.side != piece.side));
            }
        }
    }

    /// Property: any kind/side/square combination obeys the same rule
    #[test]
    fn prop_any_origin_is_landable(
        seed in seed_strategy(),
        kind in kind_strategy(),
        side in side_strategy(),
        file in 0i8..8,
        rank in 0i8..8,
    ) {
        let board = random_board(seed, 12);
        let moves = generate_moves(kind, side, Square(file, rank), &board);
        for sq in moves.iter() {
            prop_assert!(sq.is_on_board());
            prop_assert!(!board.piece_at(*sq).is_some_and(|p| p.side == side));
        }
    }

    /// Property: generation is idempotent on an unchanged board
    #[test]
    fn prop_generation_is_idempotent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_board(seed, num_moves);
        for (id, _) in board.pieces() {
            let first = board.moves_for(id);
            let second = board.moves_for(id);
            prop_assert_eq!(first.sorted(), second.sorted());
        }
    }

    /// Property: commits keep the board consistent, flip the side once and
    /// remove at most the destination occupant
    #[test]
    fn prop_commit_invariants(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let Some((id, to)) = random_move(&board, &mut rng) else {
                break;
            };
            let side = board.side_to_move();
            let count = board.piece_count();
            let occupant = board.piece_id_at(to);

            let captured = board.commit_move(id, to).unwrap();

            prop_assert_eq!(board.side_to_move(), side.opponent());
            prop_assert_eq!(captured.map(|c| c.id), occupant);
            let expected_count = if occupant.is_some() { count - 1 } else { count };
            prop_assert_eq!(board.piece_count(), expected_count);
            prop_assert_eq!(board.piece_id_at(to), Some(id));
            prop_assert!(board.check_invariants().is_ok());
        }
    }

    /// Property: placement strings round-trip any reachable position
    #[test]
    fn prop_placement_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_board(seed, num_moves);
        let text = board.to_placement();
        let restored = Board::from_placement(&text).unwrap();
        prop_assert_eq!(restored.to_placement(), text);
        prop_assert_eq!(restored.side_to_move(), board.side_to_move());
        prop_assert_eq!(restored.piece_count(), board.piece_count());
    }
}
