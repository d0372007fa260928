use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::objects::PhysicsObject;

/// Numerical scheme used to advance bodies.
///
/// `Euler` and `SemiImplicitEuler` share one formula (velocity first, then
/// position from the new velocity), so they produce identical trajectories.
/// Both names are kept so existing configurations keep their meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntegrationMethod {
    Euler,
    #[default]
    SemiImplicitEuler,
    Verlet,
}

impl IntegrationMethod {
    pub const ALL: [IntegrationMethod; 3] = [
        IntegrationMethod::Euler,
        IntegrationMethod::SemiImplicitEuler,
        IntegrationMethod::Verlet,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IntegrationMethod::Euler => "euler",
            IntegrationMethod::SemiImplicitEuler => "semi-implicit-euler",
            IntegrationMethod::Verlet => "verlet",
        }
    }
}

impl fmt::Display for IntegrationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IntegrationMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntegrationMethod::ALL
            .into_iter()
            .find(|method| method.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownIntegrationMethod(s.to_string()))
    }
}

/// Advances `body` by `dt` using the acceleration already stored on it.
///
/// Static bodies are left untouched. `dt` must be strictly positive.
pub fn integrate(body: &mut PhysicsObject, method: IntegrationMethod, dt: f64) {
    if body.is_static {
        return;
    }

    match method {
        IntegrationMethod::Euler | IntegrationMethod::SemiImplicitEuler => {
            body.previous_position = body.position;
            body.velocity += body.acceleration * dt;
            body.position += body.velocity * dt;
        }
        IntegrationMethod::Verlet => {
            let new_position =
                body.position * 2.0 - body.previous_position + body.acceleration * (dt * dt);
            body.previous_position = body.position;
            body.velocity = (new_position - body.position) / dt;
            body.position = new_position;
        }
    }
}
