use grid_snake::sim::{
    CrashCause, Direction, GameMode, Position, RoundState, SimulationEngine, Snake, SnakeId,
    TickResult, next_head, wrap,
};
use grid_snake::{MemoryScoreStore, Settings};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn mode() -> impl Strategy<Value = GameMode> {
    prop_oneof![Just(GameMode::SinglePlayer), Just(GameMode::TwoPlayer)]
}

fn started_engine(board_size: i32, seed: u64, mode: GameMode) -> SimulationEngine<MemoryScoreStore> {
    let settings = Settings {
        board_size,
        seed: Some(seed),
        mode,
        ..Settings::default()
    };
    let mut engine = SimulationEngine::new(&settings, MemoryScoreStore::default());
    engine.start();
    engine
}

fn on_board(pos: Position, board_size: i32) -> bool {
    (0..board_size).contains(&pos.x) && (0..board_size).contains(&pos.y)
}

proptest! {
    #[test]
    fn reversal_is_rejected(d in direction(), seed in any::<u64>()) {
        let mut engine = started_engine(20, seed, GameMode::TwoPlayer);
        for id in [SnakeId::One, SnakeId::Two] {
            engine.set_direction(id, d);
            let before = engine.round().direction(id);
            engine.set_direction(id, d.opposite());
            prop_assert_eq!(engine.round().direction(id), before);
        }
    }

    #[test]
    fn next_head_stays_on_board(
        board in 1..=30i32,
        x in 0..30i32,
        y in 0..30i32,
        d in direction(),
    ) {
        let head = wrap(Position::new(x, y), board);
        prop_assert!(on_board(next_head(head, d, board), board));
    }

    #[test]
    fn head_on_meeting_is_a_draw(x in 0..20i32, y in 0..20i32, d in direction(), seed in any::<u64>()) {
        let mut engine = started_engine(20, seed, GameMode::TwoPlayer);
        let p1 = Position::new(x, y);
        let p2 = next_head(p1, d, 20);
        let food = wrap(p1 + d.offset() * 5, 20);
        engine.restore(RoundState {
            snake1: Snake::new(p1),
            direction1: d,
            snake2: Snake::new(p2),
            direction2: d.opposite(),
            food,
            running: true,
            ..RoundState::default()
        });

        match engine.advance_tick() {
            TickResult::GameOver(over) => prop_assert_eq!(over.cause, CrashCause::BothCrashed),
            other => prop_assert!(false, "expected a draw, got {:?}", other),
        }
    }

    #[test]
    fn ticks_keep_round_invariants(
        board in 12..=20i32,
        seed in any::<u64>(),
        mode in mode(),
        turns in prop::collection::vec(prop::option::of((any::<bool>(), direction())), 1..60),
    ) {
        let mut engine = started_engine(board, seed, mode);

        for turn in turns {
            if let Some((second, d)) = turn {
                let id = if second { SnakeId::Two } else { SnakeId::One };
                engine.set_direction(id, d);
            }
            let before = engine.round().clone();

            match engine.advance_tick() {
                TickResult::Continuing => {
                    let after = engine.round();
                    for &id in mode.active_snakes() {
                        let ate = after.score(id) > before.score(id);
                        prop_assert_eq!(
                            after.snake(id).len(),
                            before.snake(id).len() + usize::from(ate)
                        );
                        prop_assert!(on_board(after.snake(id).head(), board));
                        prop_assert!(!after.snake(id).contains(after.food));
                        prop_assert!(on_board(after.food, board));
                    }
                }
                TickResult::GameOver(over) => {
                    let after = engine.round();
                    prop_assert_eq!(&after.snake1, &before.snake1);
                    prop_assert_eq!(&after.snake2, &before.snake2);
                    prop_assert_eq!(over.score1, before.score1);
                    prop_assert_eq!(over.score2, before.score2);
                    prop_assert!(!engine.is_running());
                    break;
                }
                TickResult::Idle => prop_assert!(false, "running round went idle"),
            }
        }
    }
}
