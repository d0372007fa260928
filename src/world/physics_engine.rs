use std::fmt;

use tracing::{debug, trace};

use crate::collision::{self, response::body_pair_mut, CollisionManifold};
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::integration::{integrate, IntegrationMethod};
use crate::math::vec2::Vec2;
use crate::objects::PhysicsObject;

/// Speed squared below which air drag is not applied.
const MIN_DRAG_SPEED_SQUARED: f64 = 1e-4;

/// Stable name for a body owned by a [`PhysicsEngine`].
///
/// Handles are never reused, so a handle to a removed body stays invalid even
/// after new bodies are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(u64);

impl BodyHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BodyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns every simulated body and advances them one fixed step at a time.
///
/// Bodies are kept in insertion order. Index-based access follows that order;
/// handle-based access survives removals.
pub struct PhysicsEngine {
    bodies: Vec<PhysicsObject>,
    handles: Vec<BodyHandle>,
    next_handle: u64,
    gravity: Vec2,
    integration_method: IntegrationMethod,
    // Contacts found during the last update
    contacts: Vec<CollisionManifold>,

    pub gravity_enabled: bool,
    pub collisions_enabled: bool,
    pub boundary_enabled: bool,
    pub air_resistance_coefficient: f64,
}

impl PhysicsEngine {
    /// Gravity in pixels per second squared, positive y pointing down.
    pub const DEFAULT_GRAVITY: Vec2 = Vec2 { x: 0.0, y: 980.0 };
    pub const DEFAULT_AIR_RESISTANCE: f64 = 0.01;

    /// Creates an empty engine with default settings.
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            handles: Vec::new(),
            next_handle: 0,
            gravity: Self::DEFAULT_GRAVITY,
            integration_method: IntegrationMethod::SemiImplicitEuler,
            contacts: Vec::new(),
            gravity_enabled: true,
            collisions_enabled: true,
            boundary_enabled: true,
            air_resistance_coefficient: Self::DEFAULT_AIR_RESISTANCE,
        }
    }

    /// Creates an empty engine configured from `config`.
    pub fn from_config(config: &EngineConfig) -> Self {
        let mut engine = Self::new();
        engine.apply_config(config);
        engine
    }

    /// Copies settings from `config` without touching the bodies.
    pub fn apply_config(&mut self, config: &EngineConfig) {
        self.gravity = config.gravity.into();
        self.integration_method = config.integration_method;
        self.gravity_enabled = config.gravity_enabled;
        self.collisions_enabled = config.collisions_enabled;
        self.boundary_enabled = config.boundary_enabled;
        self.air_resistance_coefficient = config.air_resistance_coefficient;
        debug!(
            gravity = ?self.gravity,
            method = %self.integration_method,
            "engine configured"
        );
    }

    // --- Bodies --- //

    /// Appends a body and returns its handle.
    pub fn add_object(&mut self, object: PhysicsObject) -> BodyHandle {
        let handle = BodyHandle(self.next_handle);
        self.next_handle += 1;
        self.bodies.push(object);
        self.handles.push(handle);
        debug!(%handle, index = self.bodies.len() - 1, "body added");
        handle
    }

    /// Removes the body at `index`, shifting later bodies down by one.
    /// Out-of-range indices are ignored.
    pub fn remove_object(&mut self, index: usize) -> Option<PhysicsObject> {
        if index >= self.bodies.len() {
            trace!(index, len = self.bodies.len(), "remove_object out of range");
            return None;
        }
        let handle = self.handles.remove(index);
        debug!(%handle, index, "body removed");
        Some(self.bodies.remove(index))
    }

    /// Removes the body named by `handle`, if it is still present.
    pub fn remove_by_handle(&mut self, handle: BodyHandle) -> Option<PhysicsObject> {
        let index = self.index_of(handle)?;
        self.remove_object(index)
    }

    /// Removes every body.
    pub fn clear_objects(&mut self) {
        debug!(count = self.bodies.len(), "bodies cleared");
        self.bodies.clear();
        self.handles.clear();
        self.contacts.clear();
    }

    /// Same as [`clear_objects`](Self::clear_objects); settings are kept.
    pub fn reset(&mut self) {
        self.clear_objects();
    }

    /// Bodies in insertion order.
    pub fn objects(&self) -> &[PhysicsObject] {
        &self.bodies
    }

    /// Handles in the same order as [`objects`](Self::objects).
    pub fn handles(&self) -> &[BodyHandle] {
        &self.handles
    }

    /// Iterates over handle/body pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &PhysicsObject)> {
        self.handles.iter().copied().zip(self.bodies.iter())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn handle_at(&self, index: usize) -> Option<BodyHandle> {
        self.handles.get(index).copied()
    }

    pub fn index_of(&self, handle: BodyHandle) -> Option<usize> {
        self.handles.iter().position(|&h| h == handle)
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&PhysicsObject> {
        self.index_of(handle).map(|index| &self.bodies[index])
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut PhysicsObject> {
        let index = self.index_of(handle)?;
        self.bodies.get_mut(index)
    }

    pub fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec2) -> Result<()> {
        let body = self.get_mut(handle).ok_or(Error::UnknownBody(handle))?;
        body.velocity = velocity;
        Ok(())
    }

    /// Teleports a body. `previous_position` follows so Verlet does not read
    /// the jump as velocity.
    pub fn set_position(&mut self, handle: BodyHandle, position: Vec2) -> Result<()> {
        let body = self.get_mut(handle).ok_or(Error::UnknownBody(handle))?;
        body.position = position;
        body.previous_position = position;
        Ok(())
    }

    /// First body whose shape contains `point`.
    pub fn body_at(&self, point: Vec2) -> Option<BodyHandle> {
        self.iter()
            .find(|(_, body)| body.contains_point(point))
            .map(|(handle, _)| handle)
    }

    /// Contacts resolved during the last [`update`](Self::update).
    pub fn contacts(&self) -> &[CollisionManifold] {
        &self.contacts
    }

    // --- Settings --- //

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    pub fn integration_method(&self) -> IntegrationMethod {
        self.integration_method
    }

    pub fn set_integration_method(&mut self, method: IntegrationMethod) {
        debug!(%method, "integration method changed");
        self.integration_method = method;
    }

    // --- Stepping --- //

    /// Advances the simulation by one fixed step `dt`.
    ///
    /// Forces are accumulated (gravity, friction, air drag), every dynamic
    /// body is integrated, then overlapping circle pairs are resolved.
    /// Boundary handling is a separate call,
    /// [`handle_boundary_collisions`](Self::handle_boundary_collisions).
    pub fn update(&mut self, dt: f64) {
        if self.gravity_enabled {
            self.apply_gravity();
        }
        self.apply_friction();
        self.apply_air_resistance(self.air_resistance_coefficient);

        for body in self.bodies.iter_mut().filter(|b| !b.is_static) {
            body.acceleration = body.force * body.inverse_mass();
            integrate(body, self.integration_method, dt);
            body.clear_forces();
        }

        self.contacts.clear();
        if self.collisions_enabled {
            self.handle_collisions();
        }
    }

    /// Adds `m * g` to every dynamic body.
    pub fn apply_gravity(&mut self) {
        let gravity = self.gravity;
        for body in self.bodies.iter_mut().filter(|b| !b.is_static) {
            let weight = gravity * body.mass;
            body.add_force(weight);
        }
    }

    /// Linear damping: `-friction * v` on every dynamic body with friction.
    pub fn apply_friction(&mut self) {
        for body in self.bodies.iter_mut() {
            if !body.is_static && body.material.friction > 0.0 {
                let damping = body.velocity * -body.material.friction;
                body.add_force(damping);
            }
        }
    }

    /// Quadratic drag opposite to the velocity, `coefficient * |v|^2`.
    pub fn apply_air_resistance(&mut self, coefficient: f64) {
        if coefficient <= 0.0 {
            return;
        }
        for body in self.bodies.iter_mut().filter(|b| !b.is_static) {
            let speed_squared = body.velocity.magnitude_squared();
            if speed_squared > MIN_DRAG_SPEED_SQUARED {
                let drag = -body.velocity.normalize() * (coefficient * speed_squared);
                body.add_force(drag);
            }
        }
    }

    /// Brute-force pass over every unordered pair, in index order.
    fn handle_collisions(&mut self) {
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let manifold = match collision::check_collision(&self.bodies[i], i, &self.bodies[j], j) {
                    Ok(Some(manifold)) => manifold,
                    Ok(None) => continue,
                    Err(err) => {
                        trace!(i, j, %err, "pair skipped");
                        continue;
                    }
                };

                trace!(i, j, depth = manifold.depth, "circle contact");
                let (body_a, body_b) = body_pair_mut(&mut self.bodies, i, j);
                collision::resolve_contact(body_a, body_b, &manifold);
                self.contacts.push(manifold);
            }
        }
    }

    /// Keeps circles inside a `width` x `height` box whose origin is the top
    /// left corner. Does nothing while `boundary_enabled` is off.
    pub fn handle_boundary_collisions(&mut self, width: f64, height: f64) {
        if !self.boundary_enabled {
            return;
        }
        for (index, body) in self.bodies.iter_mut().enumerate() {
            if let Err(err) = collision::resolve_boundary(body, width, height) {
                trace!(index, %err, "boundary skipped");
            }
        }
    }

    // --- Energy --- //

    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(PhysicsObject::kinetic_energy).sum()
    }

    /// Uses `|gravity|` as g, whatever direction gravity points.
    pub fn total_potential_energy(&self) -> f64 {
        let g = self.gravity.magnitude();
        self.bodies.iter().map(|body| body.potential_energy(g)).sum()
    }

    pub fn total_energy(&self) -> f64 {
        self.total_kinetic_energy() + self.total_potential_energy()
    }
}

impl Default for PhysicsEngine {
    fn default() -> Self {
        Self::new()
    }
}
