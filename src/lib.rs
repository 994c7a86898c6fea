pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyId, BodyView, Registry, NVec2, Rgb};
pub use simulation::engine::{Engine, Phase, StepReport};
pub use simulation::params::Parameters;
pub use simulation::scenario::{Scenario, Frame};
pub use simulation::drag::DragState;

pub use configuration::config::{ScenarioConfig, WindowConfig, ParametersConfig};

pub use visualization::fragsim_vis2d::run_2d;

pub use benchmark::benchmark::bench_step;
