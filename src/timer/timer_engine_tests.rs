//! Tests for timer/timer_engine

use super::*;
use crate::timer::ManualScheduler;
use proptest::prelude::*;

fn engine() -> TimerEngine<ManualScheduler> {
    TimerEngine::new(ManualScheduler::new())
}

fn run_ticks(engine: &mut TimerEngine<ManualScheduler>, count: usize) {
    for _ in 0..count {
        engine.tick();
    }
}

#[test]
fn test_new_engine_is_idle() {
    let engine = engine();

    assert_eq!(engine.status(), TimerStatus::Idle);
    assert_eq!(engine.elapsed_ms(), 0);
    assert_eq!(engine.formatted_time(), "00:00:00");
    assert!(engine.laps().is_empty());
    assert!(!engine.is_running());
    assert_eq!(engine.pause_kind(), None);
    assert!(!engine.scheduler().is_armed());
}

#[test]
fn test_start_arms_scheduler_with_tick_interval() {
    let mut engine = engine();
    engine.start();

    assert!(engine.is_running());
    assert!(engine.scheduler().is_armed());
    assert_eq!(
        engine.scheduler().interval(),
        Some(Duration::from_millis(TICK_INTERVAL_MS))
    );
}

#[test]
fn test_start_while_running_is_noop() {
    let mut engine = engine();
    engine.start();
    run_ticks(&mut engine, 3);
    engine.start();

    assert_eq!(engine.scheduler().arm_count(), 1);
    assert_eq!(engine.elapsed_ms(), 30);
}

#[test]
fn test_tick_adds_fixed_increment() {
    let mut engine = engine();
    engine.start();
    engine.tick();

    assert_eq!(engine.elapsed_ms(), TICK_INTERVAL_MS);
}

#[test]
fn test_tick_while_idle_is_ignored() {
    let mut engine = engine();
    run_ticks(&mut engine, 5);

    assert_eq!(engine.elapsed_ms(), 0);
}

#[test]
fn test_stop_freezes_elapsed_time() {
    let mut engine = engine();
    engine.start();
    run_ticks(&mut engine, 10);
    engine.stop();
    run_ticks(&mut engine, 10);

    assert_eq!(engine.status(), TimerStatus::Paused);
    assert_eq!(engine.pause_kind(), Some(PauseKind::Stopped));
    assert_eq!(engine.elapsed_ms(), 100);
    assert!(!engine.scheduler().is_armed());
}

#[test]
fn test_stop_while_idle_is_noop() {
    let mut engine = engine();
    engine.stop();

    assert_eq!(engine.status(), TimerStatus::Idle);
    assert_eq!(engine.scheduler().cancel_count(), 0);
}

#[test]
fn test_pause_records_pause_kind() {
    let mut engine = engine();
    engine.start();
    run_ticks(&mut engine, 2);
    engine.pause();

    assert_eq!(engine.status(), TimerStatus::Paused);
    assert_eq!(engine.pause_kind(), Some(PauseKind::Paused));
    assert!(!engine.scheduler().is_armed());
}

#[test]
fn test_pause_while_paused_keeps_first_kind() {
    let mut engine = engine();
    engine.start();
    engine.stop();
    engine.pause();

    assert_eq!(engine.pause_kind(), Some(PauseKind::Stopped));
}

#[test]
fn test_resume_continues_from_paused_time() {
    let mut engine = engine();
    engine.start();
    run_ticks(&mut engine, 50);
    engine.pause();
    engine.start();
    run_ticks(&mut engine, 25);

    assert_eq!(engine.elapsed_ms(), 750);
    assert_eq!(engine.pause_kind(), None);
}

#[test]
fn test_toggle_start_stop_alternates() {
    let mut engine = engine();

    engine.toggle_start_stop();
    assert!(engine.is_running());

    engine.toggle_start_stop();
    assert_eq!(engine.status(), TimerStatus::Paused);
    assert_eq!(engine.pause_kind(), Some(PauseKind::Stopped));

    engine.toggle_start_stop();
    assert!(engine.is_running());
}

#[test]
fn test_record_lap_while_not_running_is_noop() {
    let mut engine = engine();
    assert_eq!(engine.record_lap(), None);

    engine.start();
    run_ticks(&mut engine, 10);
    engine.stop();
    assert_eq!(engine.record_lap(), None);

    assert!(engine.laps().is_empty());
}

#[test]
fn test_record_lap_numbers_sequentially() {
    let mut engine = engine();
    engine.start();

    for _ in 0..3 {
        run_ticks(&mut engine, 7);
        engine.record_lap();
    }

    let laps = engine.laps();
    assert_eq!(laps.len(), 3);
    assert_eq!(laps[0], Lap::new(1, 70));
    assert_eq!(laps[1], Lap::new(2, 140));
    assert_eq!(laps[2], Lap::new(3, 210));
}

#[test]
fn test_record_lap_returns_new_lap() {
    let mut engine = engine();
    engine.start();
    run_ticks(&mut engine, 100);

    let lap = engine.record_lap().unwrap();
    assert_eq!(lap.number(), 1);
    assert_eq!(lap.cumulative_ms(), 1_000);
    assert_eq!(lap.formatted_time(), "00:01:00");
}

#[test]
fn test_lap_scenario() {
    let mut engine = engine();
    engine.start();

    run_ticks(&mut engine, 100);
    assert_eq!(engine.elapsed_ms(), 1_000);
    engine.record_lap();
    assert_eq!(engine.laps(), &[Lap::new(1, 1_000)]);

    run_ticks(&mut engine, 50);
    engine.record_lap();
    assert_eq!(engine.laps(), &[Lap::new(1, 1_000), Lap::new(2, 1_500)]);
}

#[test]
fn test_reset_while_running_cancels_and_clears() {
    let mut engine = engine();
    engine.start();
    run_ticks(&mut engine, 40);
    engine.record_lap();

    engine.reset();

    assert_eq!(engine.status(), TimerStatus::Idle);
    assert!(!engine.is_running());
    assert_eq!(engine.elapsed_ms(), 0);
    assert!(engine.laps().is_empty());
    assert!(!engine.scheduler().is_armed());
    assert_eq!(engine.scheduler().cancel_count(), 1);

    // A straggling scheduler firing must not move the clock
    engine.tick();
    assert_eq!(engine.elapsed_ms(), 0);
}

#[test]
fn test_reset_while_paused_clears_pause_kind() {
    let mut engine = engine();
    engine.start();
    run_ticks(&mut engine, 5);
    engine.pause();
    engine.reset();

    assert_eq!(engine.status(), TimerStatus::Idle);
    assert_eq!(engine.pause_kind(), None);
    assert_eq!(engine.elapsed_ms(), 0);
}

#[test]
fn test_next_lap_number_saturates() {
    assert_eq!(next_lap_number(0), 1);
    assert_eq!(next_lap_number(41), 42);
    assert_eq!(next_lap_number(u32::MAX as usize - 1), u32::MAX);
    assert_eq!(next_lap_number(u32::MAX as usize), u32::MAX);
    assert_eq!(next_lap_number(usize::MAX), u32::MAX);
}

#[test]
fn test_lap_numbering_restarts_after_reset() {
    let mut engine = engine();
    engine.start();
    engine.record_lap();
    engine.record_lap();
    engine.reset();
    engine.start();
    engine.tick();
    engine.record_lap();

    assert_eq!(engine.laps(), &[Lap::new(1, 10)]);
}

#[test]
fn test_every_exit_from_running_cancels_scheduler() {
    let exits: [fn(&mut TimerEngine<ManualScheduler>); 4] = [
        |e| e.stop(),
        |e| e.pause(),
        |e| e.reset(),
        |e| e.toggle_start_stop(),
    ];

    for exit in exits {
        let mut engine = engine();
        engine.start();
        exit(&mut engine);

        assert!(!engine.is_running());
        assert!(!engine.scheduler().is_armed());
    }
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Start,
    Stop,
    Pause,
    Toggle,
    Reset,
    Lap,
    Tick,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => Just(Op::Start),
        1 => Just(Op::Stop),
        1 => Just(Op::Pause),
        1 => Just(Op::Toggle),
        1 => Just(Op::Reset),
        1 => Just(Op::Lap),
        // Weight ticks so time actually moves
        4 => Just(Op::Tick),
    ]
}

fn apply(engine: &mut TimerEngine<ManualScheduler>, op: Op) {
    match op {
        Op::Start => engine.start(),
        Op::Stop => engine.stop(),
        Op::Pause => engine.pause(),
        Op::Toggle => engine.toggle_start_stop(),
        Op::Reset => engine.reset(),
        Op::Lap => {
            engine.record_lap();
        }
        Op::Tick => engine.tick(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_elapsed_only_decreases_on_reset(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut engine = engine();

        for op in ops {
            let before = engine.elapsed_ms();
            apply(&mut engine, op);
            let after = engine.elapsed_ms();

            match op {
                Op::Reset => prop_assert_eq!(after, 0),
                _ => prop_assert!(after >= before),
            }
        }
    }

    #[test]
    fn prop_elapsed_frozen_while_not_running(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut engine = engine();

        for op in ops {
            let was_running = engine.is_running();
            let before = engine.elapsed_ms();
            apply(&mut engine, op);

            if !was_running && !matches!(op, Op::Reset) {
                prop_assert_eq!(engine.elapsed_ms(), before);
            }
        }
    }

    #[test]
    fn prop_laps_only_appended_while_running(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut engine = engine();

        for op in ops {
            let was_running = engine.is_running();
            let before = engine.laps().len();
            apply(&mut engine, op);

            if matches!(op, Op::Lap) {
                let expected = if was_running { before + 1 } else { before };
                prop_assert_eq!(engine.laps().len(), expected);
            }
        }
    }

    #[test]
    fn prop_laps_numbered_and_ordered(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut engine = engine();

        for op in ops {
            apply(&mut engine, op);
        }

        let laps = engine.laps();
        for (i, lap) in laps.iter().enumerate() {
            prop_assert_eq!(lap.number() as usize, i + 1);
            prop_assert!(lap.cumulative_ms() <= engine.elapsed_ms());
        }
        for pair in laps.windows(2) {
            prop_assert!(pair[0].cumulative_ms() <= pair[1].cumulative_ms());
        }
    }

    #[test]
    fn prop_scheduler_armed_iff_running(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut engine = engine();

        for op in ops {
            apply(&mut engine, op);
            prop_assert_eq!(engine.scheduler().is_armed(), engine.is_running());
        }
    }
}
