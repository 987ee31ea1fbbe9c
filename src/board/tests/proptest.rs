//! Property-based tests using proptest.

use super::mirrored;
use crate::board::search::{loss_in, win_in, SearchParams, Searcher, SCORE_INFINITY};
use crate::board::{choose_move, Board, EvalWeights, Piece, Position};
use proptest::prelude::*;

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    0..=20usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play random moves, stopping before any move that would end the game.
fn random_position(seed: u64, num_moves: usize) -> Board {
    use rand::prelude::*;

    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..num_moves {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
        let piece = board.side_to_move();
        let mut next = board.clone();
        next.make_move(mv, piece);
        if next.has_won(piece) {
            break;
        }
        board = next;
    }
    board
}

/// Plain minimax without pruning or caching.
fn minimax(board: &Board, ply: u32, max_ply: u32, piece: Piece, engine: Piece) -> i32 {
    if ply > 0 {
        let last = piece.opponent();
        if board.has_won(last) {
            return if last == engine {
                win_in(ply)
            } else {
                loss_in(ply)
            };
        }
        if board.is_full() {
            return 0;
        }
        if ply >= max_ply {
            return board.evaluate(engine, &EvalWeights::default());
        }
    }

    let scores = board.legal_moves().into_iter().map(|mv| {
        let mut child = board.clone();
        child.make_move(mv, piece);
        minimax(&child, ply + 1, max_ply, piece.opponent(), engine)
    });
    if piece == engine {
        scores.fold(-SCORE_INFINITY, i32::max)
    } else {
        scores.fold(SCORE_INFINITY, i32::min)
    }
}

/// Root of the reference search: the first move with the highest score.
fn minimax_root(board: &Board, piece: Piece, max_ply: u32) -> (Position, i32) {
    let mut best = None;
    for mv in board.legal_moves() {
        let mut child = board.clone();
        child.make_move(mv, piece);
        let score = minimax(&child, 1, max_ply, piece.opponent(), piece);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
    }
    best.expect("position has a legal move")
}

proptest! {
    /// Property: pruning never changes the chosen move or the root score
    #[test]
    fn prop_alphabeta_matches_minimax(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
        max_ply in 1..=4u32,
    ) {
        let board = random_position(seed, num_moves);
        let piece = board.side_to_move();

        let mut searcher = Searcher::new(SearchParams::with_max_ply(max_ply)).unwrap();
        let result = searcher.search(&board, piece).unwrap();
        let (expected_move, expected_score) = minimax_root(&board, piece, max_ply);

        prop_assert_eq!(result.best_move, expected_move);
        prop_assert_eq!(result.score, expected_score);
    }

    /// Property: an immediate win is never missed
    #[test]
    fn prop_never_misses_immediate_win(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
        max_ply in 1..=4u32,
    ) {
        let board = random_position(seed, num_moves);
        let piece = board.side_to_move();
        let winning: Vec<Position> = board
            .legal_moves()
            .into_iter()
            .filter(|&mv| {
                let mut child = board.clone();
                child.make_move(mv, piece);
                child.has_won(piece)
            })
            .collect();

        if !winning.is_empty() {
            let mv = choose_move(&board, piece, max_ply).unwrap();
            prop_assert!(winning.contains(&mv), "chose {} instead of {:?}", mv, winning);
        }
    }

    /// Property: the same question always gets the same answer
    #[test]
    fn prop_search_is_deterministic(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_position(seed, num_moves);
        let piece = board.side_to_move();
        let first = choose_move(&board, piece, 3).unwrap();
        let second = choose_move(&board, piece, 3).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: the incremental hash matches a recomputed one
    #[test]
    fn prop_hash_consistency(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_position(seed, num_moves);
        prop_assert_eq!(board.hash(), board.calculate_hash());
    }

    /// Property: notation round-trip preserves the position
    #[test]
    fn prop_notation_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_position(seed, num_moves);
        let restored = Board::try_from_notation(&board.to_notation()).unwrap();
        prop_assert_eq!(&restored, &board);
        prop_assert_eq!(restored.hash(), board.hash());
    }

    /// Property: the heuristic is symmetric about the central column
    #[test]
    fn prop_eval_mirror_symmetric(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let board = random_position(seed, num_moves);
        let weights = EvalWeights::default();
        let mirror = mirrored(&board);
        for piece in Piece::BOTH {
            prop_assert_eq!(board.evaluate(piece, &weights), mirror.evaluate(piece, &weights));
        }
    }

    /// Property: heuristic scores stay inside the advertised bound
    #[test]
    fn prop_eval_bounded(seed in seed_strategy(), num_moves in 0..=42usize) {
        let board = random_position(seed, num_moves);
        let weights = EvalWeights::default();
        for piece in Piece::BOTH {
            let eval = i64::from(board.evaluate(piece, &weights));
            prop_assert!(eval.abs() <= weights.score_bound(), "eval {} too large", eval);
        }
    }
}
