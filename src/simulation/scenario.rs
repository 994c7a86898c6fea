//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - numerical parameters (`Parameters`)
//! - the step engine (`Engine`)
//! - system state (`Registry`) after the startup fragmentation
//! - the current frame size used for wall reflection
//! - the drag gesture state
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! fixed-rate step system and the render/input systems.

use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::drag::DragState;
use crate::simulation::engine::{Engine, StepReport};
use crate::simulation::params::{
    Parameters, INITIAL_MULTIPLIER, PRIMARY_MASS, PRIMARY_ORBIT_RADIUS, PRIMARY_RADIUS,
};
use crate::simulation::states::{Body, NVec2, Registry, Rgb};

/// Frame dimensions in scene units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
}

#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub engine: Engine,
    pub registry: Registry,
    pub frame: Frame,
    pub drag: DragState,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let parameters = Parameters {
            tick_hz: cfg.parameters.tick_hz,
            seed: cfg.parameters.seed,
        };

        let frame = Frame {
            width: cfg.window.width,
            height: cfg.window.height,
        };

        let engine = Engine::new(&parameters);
        Self::seeded(parameters, engine, frame)
    }

    /// Place the primary seed body at the frame centre, fragment it once
    /// and recentre the result
    pub fn seeded(parameters: Parameters, mut engine: Engine, frame: Frame) -> Self {
        let seed = Body::new(
            NVec2::new(frame.width / 2.0, frame.height / 2.0),
            NVec2::zeros(),
            PRIMARY_MASS,
            PRIMARY_RADIUS,
        )
        .with_color(Rgb::RED)
        .with_orbit(PRIMARY_ORBIT_RADIUS, 0.0);

        let mut registry = Registry::new(seed);
        let seed_id = registry.primary_id();
        engine.fragment(&mut registry, seed_id, INITIAL_MULTIPLIER);
        registry.recenter(frame.width, frame.height);

        log::info!(
            "scenario ready: {} bodies in a {}x{} frame",
            registry.len(),
            frame.width,
            frame.height
        );

        Self {
            parameters,
            engine,
            registry,
            frame,
            drag: DragState::default(),
        }
    }

    /// One tick with the current frame size
    pub fn step(&mut self) -> StepReport {
        let Scenario {
            engine,
            registry,
            frame,
            ..
        } = self;
        engine.step(registry, frame.width, frame.height)
    }
}
