//! Properties that must hold for any input sequence

use poop_bird::consts::SIM_DT;
use poop_bird::sim::ActorKind;
use poop_bird::{GameLogic, GamePhase, Tuning};
use proptest::prelude::*;

/// One frame of player input
#[derive(Debug, Clone, Copy)]
struct Input {
    fly: bool,
    poop: bool,
    steps: u8,
}

fn input() -> impl Strategy<Value = Input> {
    (any::<bool>(), any::<bool>(), 1u8..6).prop_map(|(fly, poop, steps)| Input { fly, poop, steps })
}

fn playing(tuning: Tuning) -> GameLogic {
    let mut logic = GameLogic::new(tuning);
    logic.init().unwrap();
    logic.to_playing().unwrap();
    logic
}

fn apply(logic: &mut GameLogic, input: Input) {
    if input.fly {
        logic.request_bird_start_fly();
    } else {
        logic.request_bird_stop_fly();
    }
    if input.poop {
        logic.request_bird_poop();
    }
    for _ in 0..input.steps {
        logic.update(SIM_DT).unwrap();
    }
}

proptest! {
    #[test]
    fn prop_ground_count_never_changes(inputs in prop::collection::vec(input(), 1..80)) {
        let mut logic = playing(Tuning::default());
        let n = logic.tuning().num_grounds;
        for i in inputs {
            apply(&mut logic, i);
            let grounds = logic
                .visible_actors()
                .values()
                .filter(|a| a.kind == ActorKind::Ground)
                .count();
            prop_assert_eq!(grounds, n);
            prop_assert_eq!(logic.ground_segments().len(), n);
        }
    }

    #[test]
    fn prop_poops_left_stays_in_range(
        inputs in prop::collection::vec(input(), 1..120),
        regen in prop_oneof![Just(0.0f32), 0.1f32..3.0],
    ) {
        let tuning = Tuning { poop_regen_interval: regen, ..Default::default() };
        let max = tuning.max_poops;
        let mut logic = playing(tuning);
        for i in inputs {
            let before = logic.num_poops_left();
            apply(&mut logic, i);
            let after = logic.num_poops_left();
            prop_assert!(after <= max);
            if regen == 0.0 {
                // Only poops change the count, and at most one per request
                prop_assert!(after <= before);
                prop_assert!(before - after <= u32::from(i.poop));
            }
        }
    }

    #[test]
    fn prop_everything_but_bird_scrolls(
        deltas in prop::collection::vec(-1.0f32..1.5, 1..6),
        frames in 0usize..90,
    ) {
        let mut logic = playing(Tuning::default());
        for _ in 0..frames {
            logic.update(SIM_DT).unwrap();
        }
        logic.spawn_npc();
        for delta in deltas {
            logic.increase_scroll_speed(delta);
            let speed = logic.scroll_speed();
            for actor in logic.visible_actors().values() {
                if actor.kind != ActorKind::Bird {
                    prop_assert!((actor.body.velocity.x + speed).abs() < 1e-4);
                }
            }
        }
    }

    #[test]
    fn prop_demo_is_deterministic(seed in any::<u64>(), frames in 1usize..240) {
        let tuning = Tuning { seed, ..Default::default() };
        let mut a = GameLogic::new(tuning.clone());
        let mut b = GameLogic::new(tuning);
        a.init().unwrap();
        b.init().unwrap();
        for _ in 0..frames {
            a.update(SIM_DT).unwrap();
            b.update(SIM_DT).unwrap();
        }
        prop_assert_eq!(a.visible_actors(), b.visible_actors());
        prop_assert_eq!(a.phase(), GamePhase::Demo);
        prop_assert_eq!(a.player_score(), 0);
    }
}
