//! Poop Bird headless runner
//!
//! Drives the game logic with a fixed-timestep accumulator and a scripted
//! pilot, logging what happens. Pass a tuning JSON file as the first argument
//! to override the defaults.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::error::Error;

    use poop_bird::consts::{MAX_SUBSTEPS, SIM_DT};
    use poop_bird::sim::{ActorKind, LineBuffer};
    use poop_bird::{GameEvent, GameLogic, GamePhase, Tuning};

    /// Seconds of attract mode before the scripted player takes over
    const DEMO_SECONDS: f32 = 5.0;
    /// Upper bound on a scripted run
    const PLAY_SECONDS: f32 = 120.0;
    /// Frame times of an uneven display, cycled
    const FRAME_TIMES: [f32; 3] = [0.016, 0.017, 0.021];

    struct Runner {
        logic: GameLogic,
        accumulator: f32,
        frame: usize,
        elapsed: f32,
    }

    impl Runner {
        fn new(logic: GameLogic) -> Self {
            Self {
                logic,
                accumulator: 0.0,
                frame: 0,
                elapsed: 0.0,
            }
        }

        /// Run simulation ticks for one display frame
        fn frame(&mut self) -> Result<(), Box<dyn Error>> {
            let dt = FRAME_TIMES[self.frame % FRAME_TIMES.len()].min(0.1);
            self.frame += 1;
            self.elapsed += dt;
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                if self.logic.phase() == GamePhase::Playing {
                    self.pilot();
                }
                self.logic.update(SIM_DT)?;
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
            for event in self.logic.drain_events() {
                log_event(&event);
            }
            Ok(())
        }

        /// Scripted player: keep altitude, poop on anything right below
        fn pilot(&mut self) {
            let Some(bird) = self.logic.bird_position() else {
                return;
            };
            if bird.y < 4.0 {
                self.logic.request_bird_start_fly();
            } else if bird.y > 5.0 {
                self.logic.request_bird_stop_fly();
            }

            // Poops scroll with the world, so only a target under the bird is hit
            let reach = self.logic.tuning().npc_half_width;
            let target_below = self.logic.visible_actors().values().any(|actor| {
                actor.kind == ActorKind::Npc && (actor.body.position.x - bird.x).abs() < reach
            });
            if target_below {
                self.logic.request_bird_poop();
            }
        }
    }

    fn log_event(event: &GameEvent) {
        match event {
            GameEvent::PhaseChanged { from, to } => log::debug!("phase {from:?} -> {to:?}"),
            GameEvent::Pooped { poop, poops_left } => {
                log::debug!("poop {poop:?}, {poops_left} left")
            }
            GameEvent::NpcSpawned { npc } => log::debug!("npc {npc:?} spawned"),
            GameEvent::Removed { actor } => log::debug!("{:?} {:?} removed", actor.kind, actor.id),
            GameEvent::Scored { score } => log::info!("score {score}"),
            GameEvent::GameOver { score } => log::debug!("game over, final score {score}"),
        }
    }

    fn load_tuning() -> Result<Tuning, Box<dyn Error>> {
        match std::env::args().nth(1) {
            Some(path) => {
                log::info!("loading tuning from {path}");
                let json = std::fs::read_to_string(&path)?;
                Ok(Tuning::from_json(&json)?)
            }
            None => Ok(Tuning::default()),
        }
    }

    pub fn run() -> Result<(), Box<dyn Error>> {
        let mut logic = GameLogic::new(load_tuning()?);
        logic.init()?;
        let mut runner = Runner::new(logic);

        while runner.elapsed < DEMO_SECONDS {
            runner.frame()?;
        }
        log::info!(
            "demo done after {} frames, {} actors",
            runner.frame,
            runner.logic.visible_actors().len()
        );

        runner.logic.to_playing()?;
        runner.elapsed = 0.0;
        while runner.elapsed < PLAY_SECONDS && runner.logic.phase() == GamePhase::Playing {
            runner.frame()?;
        }

        let logic = &runner.logic;
        log::info!(
            "run ended in {:?} after {:.1}s: score {}, {} poops left, scroll speed {:.2}",
            logic.phase(),
            runner.elapsed,
            logic.player_score(),
            logic.num_poops_left(),
            logic.scroll_speed()
        );

        if logic.tuning().debug_draw {
            let mut lines = LineBuffer::default();
            logic.debug_draw_into(&mut lines);
            log::debug!(
                "debug draw: {} line vertices, {} bytes",
                lines.vertices().len(),
                lines.as_bytes().len()
            );
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Poop Bird (headless) starting...");

    if let Err(e) = headless::run() {
        log::error!("run failed: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is the deliverable on wasm; hosts drive GameLogic directly
}
