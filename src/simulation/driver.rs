use tracing::{debug, warn};

use super::energy::EnergyHistory;
use super::scenario::Scenario;
use super::slingshot::{predict_trajectory, Slingshot};
use super::spawner::ObjectSpawner;
use crate::config::{Config, SimulationConfig};
use crate::error::Result;
use crate::math::vec2::Vec2;
use crate::world::{BodyHandle, PhysicsEngine};

/// Mass given to bodies spawned by a click.
pub const DEFAULT_SPAWN_MASS: f64 = 10.0;

/// Headless fixed-timestep driver around a [`PhysicsEngine`].
///
/// Frame time goes in through [`advance`](Self::advance), is clamped and
/// scaled, and is consumed in whole fixed steps. After every step the world
/// boundary is enforced and an energy sample is recorded.
pub struct Simulation {
    engine: PhysicsEngine,
    settings: SimulationConfig,
    spawner: ObjectSpawner,
    history: EnergyHistory,
    scenario: Scenario,
    accumulator: f64,
    elapsed: f64,
    paused: bool,
    step_requested: bool,
    drag: Option<Slingshot>,
}

impl Simulation {
    /// Validates `config`, builds the engine and loads the sandbox scenario.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let Config { engine, simulation } = config;

        let mut sim = Self {
            engine: PhysicsEngine::from_config(&engine),
            spawner: ObjectSpawner::from_seed(simulation.seed),
            history: EnergyHistory::new(simulation.energy_history_capacity),
            settings: simulation,
            scenario: Scenario::default(),
            accumulator: 0.0,
            elapsed: 0.0,
            paused: false,
            step_requested: false,
            drag: None,
        };
        sim.load_scenario(Scenario::default());
        Ok(sim)
    }

    pub fn engine(&self) -> &PhysicsEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut PhysicsEngine {
        &mut self.engine
    }

    pub fn settings(&self) -> &SimulationConfig {
        &self.settings
    }

    pub fn history(&self) -> &EnergyHistory {
        &self.history
    }

    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    /// Simulated seconds since the scenario was loaded.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    // --- Time --- //

    /// Feeds `frame_dt` seconds of wall-clock time and runs every whole fixed
    /// step it covers. Returns the number of steps run.
    pub fn advance(&mut self, frame_dt: f64) -> usize {
        if self.paused && !self.step_requested {
            return 0;
        }
        self.step_requested = false;

        let max = self.settings.max_frame_delta;
        let mut frame_dt = frame_dt.max(0.0);
        if frame_dt > max {
            warn!(frame_dt, max, "frame delta clamped");
            frame_dt = max;
        }
        self.accumulator += frame_dt * self.settings.simulation_speed;

        let dt = self.settings.fixed_timestep;
        let mut steps = 0;
        while self.accumulator >= dt {
            self.step_once();
            self.accumulator -= dt;
            steps += 1;
        }
        steps
    }

    /// Runs exactly one fixed step regardless of pause state or accumulator.
    pub fn step_once(&mut self) {
        let dt = self.settings.fixed_timestep;
        self.engine.update(dt);
        self.engine
            .handle_boundary_collisions(self.settings.world_width, self.settings.world_height);
        self.elapsed += dt;
        self.history.record(
            self.elapsed,
            self.engine.total_kinetic_energy(),
            self.engine.total_potential_energy(),
        );
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        debug!(paused = self.paused, "pause toggled");
        self.paused
    }

    /// Lets the next [`advance`](Self::advance) run while paused.
    pub fn request_step(&mut self) {
        self.step_requested = true;
    }

    /// Negative speeds are treated as zero.
    pub fn set_speed(&mut self, speed: f64) {
        self.settings.simulation_speed = speed.max(0.0);
    }

    // --- Scenarios --- //

    /// Replaces every body with `scenario`'s layout and restarts the clock.
    pub fn load_scenario(&mut self, scenario: Scenario) {
        self.scenario = scenario;
        self.engine.clear_objects();
        self.history.clear();
        self.elapsed = 0.0;
        self.accumulator = 0.0;
        self.drag = None;
        scenario.populate(&mut self.engine, &mut self.spawner);
        debug!(%scenario, "scenario loaded");
    }

    pub fn reload(&mut self) {
        self.load_scenario(self.scenario);
    }

    /// Removes every body and the energy history; the clock keeps running.
    pub fn clear(&mut self) {
        self.engine.clear_objects();
        self.history.clear();
        self.drag = None;
    }

    // --- Toggles --- //

    pub fn toggle_gravity(&mut self) -> bool {
        self.engine.gravity_enabled = !self.engine.gravity_enabled;
        self.engine.gravity_enabled
    }

    pub fn toggle_collisions(&mut self) -> bool {
        self.engine.collisions_enabled = !self.engine.collisions_enabled;
        self.engine.collisions_enabled
    }

    pub fn toggle_boundary(&mut self) -> bool {
        self.engine.boundary_enabled = !self.engine.boundary_enabled;
        self.engine.boundary_enabled
    }

    // --- Interaction --- //

    /// Adds a tinted default body.
    pub fn spawn(&mut self, position: Vec2, mass: f64, velocity: Vec2) -> BodyHandle {
        let body = self.spawner.spawn(position, mass, velocity);
        self.engine.add_object(body)
    }

    /// What a plain click does: a resting body of [`DEFAULT_SPAWN_MASS`].
    pub fn spawn_at(&mut self, position: Vec2) -> BodyHandle {
        self.spawn(position, DEFAULT_SPAWN_MASS, Vec2::ZERO)
    }

    pub fn pick(&self, position: Vec2) -> Option<BodyHandle> {
        self.engine.body_at(position)
    }

    /// Starts pulling the dynamic body under `pointer`, if any.
    pub fn begin_drag(&mut self, pointer: Vec2) -> bool {
        let Some(handle) = self.pick(pointer) else {
            return false;
        };
        let Some(body) = self.engine.get(handle) else {
            return false;
        };
        if body.is_static {
            return false;
        }
        self.drag = Some(Slingshot::new(handle, body.position));
        true
    }

    /// Updates the pull. Returns the predicted flight path, or `None` when no
    /// drag is active or the dragged body has gone away.
    pub fn drag_to(&mut self, pointer: Vec2) -> Option<Vec<Vec2>> {
        let sling = self.drag?;
        let velocity = sling.launch_velocity(pointer);

        if self.engine.set_velocity(sling.body, velocity).is_err()
            || self.engine.set_position(sling.body, sling.anchor).is_err()
        {
            self.drag = None;
            return None;
        }

        Some(predict_trajectory(
            sling.anchor,
            velocity,
            self.engine.gravity(),
            self.settings.world_width,
            self.settings.world_height,
        ))
    }

    /// Releases the body; it keeps the launch velocity set while dragging.
    pub fn end_drag(&mut self) -> Option<BodyHandle> {
        self.drag.take().map(|sling| sling.body)
    }

    pub fn dragging(&self) -> Option<BodyHandle> {
        self.drag.map(|sling| sling.body)
    }
}
