//! Game logic: owns the world and advances it on every `update`
//!
//! An update runs one or more fixed-order ticks: gameplay (spawner, bird,
//! ground, scroll) so intents land before the step, then the physics step,
//! then contact resolution on what the step produced.

use std::collections::BTreeMap;
use std::fmt;

use glam::Vec2;

use super::actor::{ActorId, ActorKind};
use super::bird::BirdController;
use super::contact::{cull_departed, resolve_contacts};
use super::debug_draw::{DebugDraw, draw_bodies};
use super::ground::GroundStrip;
use super::physics::{BodyHandle, BodyView, PhysicsWorld, SimpleWorld};
use super::registry::BodyRegistry;
use super::spawner::{self, NpcSpawner};
use super::state::{GameEvent, GamePhase};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::error::{SimError, check_dt};
use crate::tuning::Tuning;

/// A registered actor and its body, as handed to the view layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleActor {
    pub kind: ActorKind,
    pub body: BodyView,
}

/// Mechanics of the game plus the API views use to influence them
pub struct GameLogic<W: PhysicsWorld = SimpleWorld> {
    tuning: Tuning,
    initialized: bool,
    phase: GamePhase,
    registry: BodyRegistry<W>,
    ground: GroundStrip,
    bird: BirdController,
    spawner: NpcSpawner,
    /// Poop hits while playing
    score: u32,
    speed_up_timer: f32,
    events: Vec<GameEvent>,
    debug_drawer: Option<Box<dyn DebugDraw>>,
}

impl<W: PhysicsWorld> fmt::Debug for GameLogic<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameLogic")
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("poops_left", &self.bird.poops_left())
            .field("scroll_speed", &self.registry.scroll_speed())
            .field("actors", &self.registry.len())
            .finish()
    }
}

impl GameLogic<SimpleWorld> {
    /// Game logic backed by the built-in physics world
    pub fn new(tuning: Tuning) -> Self {
        let world = SimpleWorld::new(Vec2::new(0.0, tuning.gravity));
        Self::with_world(world, tuning)
    }
}

impl Default for GameLogic<SimpleWorld> {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl<W: PhysicsWorld> GameLogic<W> {
    /// Wrap an (empty) physics world; nothing is spawned until [`Self::init`]
    pub fn with_world(world: W, tuning: Tuning) -> Self {
        let registry = BodyRegistry::new(world, tuning.initial_scroll_speed);
        Self {
            bird: BirdController::new(&tuning),
            spawner: NpcSpawner::new(&tuning),
            registry,
            ground: GroundStrip::default(),
            tuning,
            initialized: false,
            phase: GamePhase::Demo,
            score: 0,
            speed_up_timer: 0.0,
            events: Vec::new(),
            debug_drawer: None,
        }
    }

    /// Validate tuning, lay out the ground and the bird, start in demo mode
    pub fn init(&mut self) -> Result<(), SimError> {
        self.tuning.validate()?;
        self.reset_world();
        self.initialized = true;
        self.phase = GamePhase::Demo;
        log::info!(
            "game logic initialized: {} grounds, seed {}",
            self.ground.len(),
            self.tuning.seed
        );
        Ok(())
    }

    /// Advance the game by `dt` seconds
    ///
    /// The frame is split into ticks no longer than [`SIM_DT`], at most
    /// [`MAX_SUBSTEPS`] of them. Time beyond that is dropped.
    pub fn update(&mut self, dt: f32) -> Result<(), SimError> {
        let dt = check_dt(dt).inspect_err(|e| log::warn!("update rejected: {e}"))?;
        if !self.initialized {
            return Err(SimError::NotInitialized);
        }

        let max_frame = SIM_DT * MAX_SUBSTEPS as f32;
        if dt > max_frame {
            log::debug!("long frame of {dt:.3}s clamped to {max_frame:.3}s");
        }
        let frame = dt.min(max_frame);
        let ticks = ((frame / SIM_DT).ceil() as u32).clamp(1, MAX_SUBSTEPS);
        let tick_dt = frame / ticks as f32;

        for _ in 0..ticks {
            if !self.phase.is_running() {
                break;
            }
            self.tick(tick_dt);
        }
        Ok(())
    }

    fn tick(&mut self, dt: f32) {
        let playing = self.phase == GamePhase::Playing;

        // Gameplay
        if let Some(npc) = self.spawner.tick(dt, &mut self.registry, &self.tuning) {
            self.events.push(GameEvent::NpcSpawned { npc });
        }
        self.bird.update_flight(&mut self.registry, &self.tuning, !playing);
        if playing {
            if let Some(poop) = self.bird.try_poop(&mut self.registry, &self.tuning) {
                self.events.push(GameEvent::Pooped {
                    poop,
                    poops_left: self.bird.poops_left(),
                });
            }
        }
        self.bird.advance(dt, &self.tuning, playing);
        self.ground.recycle(&mut self.registry, self.tuning.recycle_margin);
        if playing {
            self.scale_scroll_speed(dt);
        }

        // Physics
        self.registry.world.step(dt);

        // Contacts
        let contacts = self.registry.world.drain_contacts();
        let outcome = resolve_contacts(&mut self.registry, &contacts, self.bird.actor());
        let departed = cull_departed(&mut self.registry, &self.tuning);
        for &actor in outcome.removed.iter().chain(&departed) {
            self.events.push(GameEvent::Removed { actor });
        }

        if playing {
            for _ in 0..outcome.hits {
                self.score += 1;
                self.events.push(GameEvent::Scored { score: self.score });
            }
            if outcome.bird_hit {
                self.set_phase(GamePhase::GameOver);
                self.events.push(GameEvent::GameOver { score: self.score });
                log::info!("game over with score {}", self.score);
            }
        }
    }

    /// Restart the world in attract mode
    pub fn to_demo(&mut self) -> Result<(), SimError> {
        self.enter(GamePhase::Demo)
    }

    /// Restart the world with the player in control
    pub fn to_playing(&mut self) -> Result<(), SimError> {
        self.enter(GamePhase::Playing)
    }

    fn enter(&mut self, phase: GamePhase) -> Result<(), SimError> {
        if !self.initialized {
            return Err(SimError::NotInitialized);
        }
        self.reset_world();
        self.set_phase(phase);
        Ok(())
    }

    fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        self.phase = to;
        if from != to {
            log::info!("phase {from:?} -> {to:?}");
            self.events.push(GameEvent::PhaseChanged { from, to });
        }
    }

    /// Drop every actor and rebuild ground and bird with fresh counters
    fn reset_world(&mut self) {
        self.registry.clear();
        self.registry.reset_scroll_speed(self.tuning.initial_scroll_speed);
        self.ground = GroundStrip::lay_out(&mut self.registry, &self.tuning);
        self.bird = BirdController::new(&self.tuning);
        self.bird.spawn(&mut self.registry, &self.tuning);
        self.spawner = NpcSpawner::new(&self.tuning);
        self.score = 0;
        self.speed_up_timer = 0.0;
    }

    fn scale_scroll_speed(&mut self, dt: f32) {
        let interval = self.tuning.speed_up_interval;
        if interval <= 0.0 {
            return;
        }
        self.speed_up_timer += dt;
        while self.speed_up_timer >= interval {
            self.speed_up_timer -= interval;
            let room = self.tuning.max_scroll_speed - self.registry.scroll_speed();
            let delta = self.tuning.speed_up_amount.min(room);
            if delta > 0.0 {
                self.increase_scroll_speed(delta);
            }
        }
    }

    /// Change the scroll speed of everything but the bird; no-op after game over
    pub fn increase_scroll_speed(&mut self, delta: f32) {
        if !self.phase.is_running() {
            return;
        }
        let bird = self.bird.actor();
        self.registry.increase_scroll_speed(delta, bird);
    }

    /// Put a new NPC at the leading edge; `None` before init or after game over
    pub fn spawn_npc(&mut self) -> Option<ActorId> {
        if !self.initialized || !self.phase.is_running() {
            return None;
        }
        let npc = spawner::spawn_npc(&mut self.registry, &self.tuning);
        self.events.push(GameEvent::NpcSpawned { npc });
        Some(npc)
    }

    // === Intents from the input layer ===

    pub fn request_bird_start_fly(&mut self) {
        if self.phase.accepts_input() {
            self.bird.set_flying(true);
        }
    }

    pub fn request_bird_stop_fly(&mut self) {
        if self.phase.accepts_input() {
            self.bird.set_flying(false);
        }
    }

    /// Honored on the next update if a charge is left and the cooldown passed
    pub fn request_bird_poop(&mut self) {
        if self.phase.accepts_input() {
            self.bird.request_poop();
        }
    }

    // === Queries for the view layer ===

    /// Snapshot of every registered actor and its body
    pub fn visible_actors(&self) -> BTreeMap<ActorId, VisibleActor> {
        self.registry
            .views()
            .map(|(actor, body)| {
                (
                    actor.id,
                    VisibleActor {
                        kind: actor.kind,
                        body,
                    },
                )
            })
            .collect()
    }

    /// Body of an actor, `None` if it is not registered
    pub fn get_body(&self, actor: ActorId) -> Option<BodyHandle> {
        self.registry.body(actor)
    }

    pub fn num_poops_left(&self) -> u32 {
        self.bird.poops_left()
    }

    pub fn player_score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn scroll_speed(&self) -> f32 {
        self.registry.scroll_speed()
    }

    pub fn bird(&self) -> Option<ActorId> {
        self.bird.actor()
    }

    pub fn bird_position(&self) -> Option<Vec2> {
        self.bird.actor().and_then(|id| self.registry.position(id))
    }

    pub fn time_since_last_poop(&self) -> f32 {
        self.bird.time_since_last_poop()
    }

    /// Ground segment ids, leftmost first
    pub fn ground_segments(&self) -> Vec<ActorId> {
        self.ground.segments().collect()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Debug drawing ===

    pub fn set_debug_drawer(&mut self, drawer: Box<dyn DebugDraw>) {
        self.debug_drawer = Some(drawer);
    }

    /// Draw all body shapes into the drawer set with [`Self::set_debug_drawer`]
    pub fn debug_draw(&mut self) {
        if !self.tuning.debug_draw {
            return;
        }
        let bodies = self.registry.world().bodies();
        if let Some(drawer) = self.debug_drawer.as_deref_mut() {
            draw_bodies(drawer, &bodies);
        }
    }

    /// Draw all body shapes into a borrowed sink
    pub fn debug_draw_into(&self, sink: &mut dyn DebugDraw) {
        if self.tuning.debug_draw {
            draw_bodies(sink, &self.registry.world().bodies());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::consts::SIM_DT;

    fn started(tuning: Tuning) -> GameLogic {
        let mut logic = GameLogic::new(tuning);
        logic.init().unwrap();
        logic
    }

    fn playing(tuning: Tuning) -> GameLogic {
        let mut logic = started(tuning);
        logic.to_playing().unwrap();
        logic
    }

    fn no_regen() -> Tuning {
        Tuning {
            poop_regen_interval: 0.0,
            ..Default::default()
        }
    }

    fn count_kind(logic: &GameLogic, kind: ActorKind) -> usize {
        logic.visible_actors().values().filter(|a| a.kind == kind).count()
    }

    #[test]
    fn test_update_before_init_fails() {
        let mut logic = GameLogic::default();
        assert!(matches!(logic.update(SIM_DT), Err(SimError::NotInitialized)));
        assert!(matches!(logic.to_playing(), Err(SimError::NotInitialized)));
        assert!(logic.spawn_npc().is_none());
    }

    #[test]
    fn test_bad_dt_rejected_without_change() {
        let mut logic = started(Tuning::default());
        let before = logic.bird_position();
        assert!(matches!(logic.update(-1.0), Err(SimError::InvalidTimeStep(_))));
        assert!(logic.update(f32::NAN).is_err());
        assert_eq!(logic.bird_position(), before);
    }

    #[test]
    fn test_init_lays_out_world() {
        let logic = started(Tuning::default());
        let tuning = logic.tuning().clone();
        assert_eq!(logic.phase(), GamePhase::Demo);
        assert_eq!(logic.ground_segments().len(), tuning.num_grounds);
        assert_eq!(count_kind(&logic, ActorKind::Bird), 1);
        assert_eq!(logic.num_poops_left(), tuning.max_poops);
        assert_eq!(logic.player_score(), 0);
        assert_eq!(logic.bird_position(), Some(tuning.bird_start()));
    }

    #[test]
    fn test_ground_count_is_invariant() {
        let mut logic = started(Tuning::default());
        let n = logic.tuning().num_grounds;
        let original = logic.ground_segments();
        for _ in 0..(30.0 / SIM_DT) as usize {
            logic.update(SIM_DT).unwrap();
            assert_eq!(count_kind(&logic, ActorKind::Ground), n);
        }
        // Same segments, just reordered
        let mut now = logic.ground_segments();
        let mut before = original.clone();
        now.sort();
        before.sort();
        assert_eq!(now, before);
        assert_ne!(logic.ground_segments(), original);
    }

    #[test]
    fn test_ground_strip_stays_contiguous() {
        let mut logic = started(Tuning::default());
        let width = logic.tuning().ground_width;
        for _ in 0..(20.0 / SIM_DT) as usize {
            logic.update(SIM_DT).unwrap();
        }
        let actors = logic.visible_actors();
        let xs: Vec<f32> = logic
            .ground_segments()
            .iter()
            .map(|id| actors[id].body.position.x)
            .collect();
        for pair in xs.windows(2) {
            assert!((pair[1] - pair[0] - width).abs() < 1e-3);
        }
        // Visible field is always covered
        assert!(xs[0] - width / 2.0 <= 0.0);
        assert!(xs[xs.len() - 1] + width / 2.0 >= logic.tuning().view_width);
    }

    #[test]
    fn test_increase_scroll_speed_exempts_bird() {
        let mut logic = started(Tuning::default());
        logic.spawn_npc();
        logic.increase_scroll_speed(2.0);

        let speed = logic.scroll_speed();
        assert_eq!(speed, logic.tuning().initial_scroll_speed + 2.0);
        for actor in logic.visible_actors().values() {
            if actor.kind == ActorKind::Bird {
                assert_eq!(actor.body.velocity.x, 0.0);
            } else {
                assert_eq!(actor.body.velocity.x, -speed);
            }
        }
    }

    #[test]
    fn test_poop_charges_scenario() {
        let mut logic = playing(no_regen());
        let max = logic.tuning().max_poops;
        let cooldown_frames = (logic.tuning().poop_duration / SIM_DT).ceil() as usize + 1;
        logic.drain_events();

        for i in 0..max {
            logic.request_bird_poop();
            logic.update(SIM_DT).unwrap();
            assert_eq!(logic.num_poops_left(), max - i - 1);
            for _ in 0..cooldown_frames {
                logic.update(SIM_DT).unwrap();
            }
        }
        let pooped = logic
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::Pooped { .. }))
            .count();
        assert_eq!(pooped, max as usize);
        assert_eq!(logic.num_poops_left(), 0);

        logic.request_bird_poop();
        logic.update(SIM_DT).unwrap();
        assert_eq!(logic.num_poops_left(), 0);
        assert!(!logic
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::Pooped { .. })));
    }

    #[test]
    fn test_poop_during_cooldown_has_no_effect() {
        let mut logic = playing(no_regen());
        logic.request_bird_poop();
        logic.update(SIM_DT).unwrap();
        let poops = count_kind(&logic, ActorKind::Poop);
        let left = logic.num_poops_left();

        logic.request_bird_poop();
        logic.update(SIM_DT).unwrap();
        assert_eq!(count_kind(&logic, ActorKind::Poop), poops);
        assert_eq!(logic.num_poops_left(), left);
    }

    #[test]
    fn test_repeated_requests_in_one_frame_poop_once() {
        let mut logic = playing(no_regen());
        logic.request_bird_poop();
        logic.request_bird_poop();
        logic.request_bird_poop();
        logic.update(SIM_DT).unwrap();
        assert_eq!(logic.num_poops_left(), logic.tuning().max_poops - 1);
        assert_eq!(count_kind(&logic, ActorKind::Poop), 1);
    }

    #[test]
    fn test_poop_on_npc_scores() {
        let mut logic = playing(Tuning::default());
        let pos = Vec2::new(10.0, 4.0);
        let npc = spawner::spawn_npc_at(&mut logic.registry, &logic.tuning, pos);
        let (poop, _) = logic
            .registry
            .add_to_world(ActorKind::Poop, &logic.tuning, pos, true);
        logic.drain_events();

        logic.update(SIM_DT).unwrap();

        assert_eq!(logic.player_score(), 1);
        let actors = logic.visible_actors();
        assert!(!actors.contains_key(&npc));
        assert!(!actors.contains_key(&poop));
        assert!(logic.get_body(npc).is_none());
        let events = logic.drain_events();
        assert!(events.contains(&GameEvent::Scored { score: 1 }));
        let removed: Vec<ActorId> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::Removed { actor } => Some(actor.id),
                _ => None,
            })
            .collect();
        assert!(removed.contains(&npc));
        assert!(removed.contains(&poop));
    }

    #[test]
    fn test_departed_poop_reported() {
        let mut logic = playing(Tuning::default());
        let (poop, _) = logic
            .registry
            .add_to_world(ActorKind::Poop, &logic.tuning, Vec2::new(-3.0, 4.0), true);
        logic.drain_events();

        logic.update(SIM_DT).unwrap();
        assert!(logic.get_body(poop).is_none());
        assert!(logic.drain_events().iter().any(|e| matches!(
            e,
            GameEvent::Removed { actor } if actor.id == poop && actor.kind == ActorKind::Poop
        )));
    }

    #[test]
    fn test_long_frames_keep_bird_above_ground() {
        let mut logic = playing(Tuning::default());
        let ground_top = logic.tuning().ground_top();
        for _ in 0..60 {
            logic.update(0.5).unwrap();
            assert!(logic.bird_position().unwrap().y > ground_top);
        }
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut logic = playing(Tuning::default());
        let before = logic.time_since_last_poop();
        logic.update(0.5).unwrap();
        let advanced = logic.time_since_last_poop() - before;
        assert!((advanced - SIM_DT * MAX_SUBSTEPS as f32).abs() < 1e-4);
    }

    #[test]
    fn test_game_over_ignores_world_changes() {
        let mut logic = playing(Tuning::default());
        let bird_pos = logic.bird_position().unwrap();
        spawner::spawn_npc_at(&mut logic.registry, &logic.tuning, bird_pos);
        logic.update(SIM_DT).unwrap();
        assert_eq!(logic.phase(), GamePhase::GameOver);

        let actors = logic.visible_actors();
        let speed = logic.scroll_speed();
        assert!(logic.spawn_npc().is_none());
        logic.increase_scroll_speed(5.0);
        assert_eq!(logic.scroll_speed(), speed);
        assert_eq!(logic.visible_actors(), actors);
    }

    #[test]
    fn test_npc_hits_bird_ends_game() {
        let mut logic = playing(Tuning::default());
        let bird_pos = logic.bird_position().unwrap();
        spawner::spawn_npc_at(&mut logic.registry, &logic.tuning, bird_pos);

        logic.update(SIM_DT).unwrap();
        assert_eq!(logic.phase(), GamePhase::GameOver);
        assert!(logic
            .drain_events()
            .contains(&GameEvent::GameOver { score: 0 }));

        // Frozen
        let frozen = logic.bird_position();
        logic.request_bird_start_fly();
        logic.update(SIM_DT).unwrap();
        assert_eq!(logic.bird_position(), frozen);
    }

    #[test]
    fn test_transitions_reset_state() {
        let mut logic = playing(no_regen());
        logic.request_bird_poop();
        logic.update(SIM_DT).unwrap();
        logic.increase_scroll_speed(3.0);
        logic.score = 4;

        logic.to_demo().unwrap();
        logic.to_playing().unwrap();

        assert_eq!(logic.phase(), GamePhase::Playing);
        assert_eq!(logic.player_score(), 0);
        assert_eq!(logic.num_poops_left(), logic.tuning().max_poops);
        assert_eq!(logic.scroll_speed(), logic.tuning().initial_scroll_speed);
        assert_eq!(count_kind(&logic, ActorKind::Poop), 0);
        assert_eq!(count_kind(&logic, ActorKind::Bird), 1);
    }

    #[test]
    fn test_game_over_can_restart() {
        let mut logic = playing(Tuning::default());
        let bird_pos = logic.bird_position().unwrap();
        spawner::spawn_npc_at(&mut logic.registry, &logic.tuning, bird_pos);
        logic.update(SIM_DT).unwrap();
        assert_eq!(logic.phase(), GamePhase::GameOver);

        logic.to_playing().unwrap();
        assert_eq!(logic.phase(), GamePhase::Playing);
        assert_eq!(count_kind(&logic, ActorKind::Npc), 0);
    }

    #[test]
    fn test_demo_ignores_input() {
        let mut logic = started(Tuning::default());
        logic.request_bird_poop();
        logic.request_bird_start_fly();
        logic.update(SIM_DT).unwrap();
        assert_eq!(count_kind(&logic, ActorKind::Poop), 0);
        assert_eq!(logic.num_poops_left(), logic.tuning().max_poops);
    }

    #[test]
    fn test_demo_autopilot_hovers() {
        let mut logic = started(Tuning::default());
        let tuning = logic.tuning().clone();
        for _ in 0..(20.0 / SIM_DT) as usize {
            logic.update(SIM_DT).unwrap();
            let y = logic.bird_position().unwrap().y;
            assert!(y > tuning.demo_hover_height - 1.5);
            assert!(y < tuning.view_height);
        }
        assert_eq!(logic.phase(), GamePhase::Demo);
        assert_eq!(logic.player_score(), 0);
    }

    #[test]
    fn test_flight_request_lifts_bird() {
        let mut logic = playing(Tuning::default());
        let start = logic.bird_position().unwrap().y;
        logic.request_bird_start_fly();
        for _ in 0..30 {
            logic.update(SIM_DT).unwrap();
        }
        assert!(logic.bird_position().unwrap().y > start);

        logic.request_bird_stop_fly();
        let top = logic.bird_position().unwrap().y;
        for _ in 0..90 {
            logic.update(SIM_DT).unwrap();
        }
        assert!(logic.bird_position().unwrap().y < top);
    }

    #[test]
    fn test_scroll_speed_scales_while_playing() {
        let tuning = Tuning {
            speed_up_interval: 1.0,
            speed_up_amount: 0.5,
            max_scroll_speed: 4.0,
            ..Default::default()
        };
        let mut logic = playing(tuning);
        for _ in 0..(3.3 / SIM_DT) as usize {
            logic.update(SIM_DT).unwrap();
        }
        // 3.0 -> 3.5 -> 4.0, then capped
        assert!((logic.scroll_speed() - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_scroll_speed_fixed_in_demo() {
        let tuning = Tuning {
            speed_up_interval: 1.0,
            ..Default::default()
        };
        let mut logic = started(tuning);
        for _ in 0..(3.0 / SIM_DT) as usize {
            logic.update(SIM_DT).unwrap();
        }
        assert_eq!(logic.scroll_speed(), logic.tuning().initial_scroll_speed);
    }

    struct CountingDrawer(Rc<Cell<usize>>);

    impl DebugDraw for CountingDrawer {
        fn draw_polygon(&mut self, _vertices: &[Vec2], _color: [f32; 4]) {
            self.0.set(self.0.get() + 1);
        }

        fn draw_circle(&mut self, _center: Vec2, _radius: f32, _color: [f32; 4]) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_debug_draw_gated_by_flag() {
        let calls = Rc::new(Cell::new(0));

        let mut off = started(Tuning {
            debug_draw: false,
            ..Default::default()
        });
        off.set_debug_drawer(Box::new(CountingDrawer(calls.clone())));
        off.debug_draw();
        assert_eq!(calls.get(), 0);

        let mut on = started(Tuning {
            debug_draw: true,
            ..Default::default()
        });
        on.set_debug_drawer(Box::new(CountingDrawer(calls.clone())));
        on.debug_draw();
        assert_eq!(calls.get(), on.visible_actors().len());
    }
}
