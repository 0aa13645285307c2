//! Real-time 2D surface-wave water for games.
//!
//! `waterline` simulates a body of water as a chain of spring-damper joints.
//! External collisions inject splashes, waves spread between neighboring
//! joints, and splashes throw pooled droplets. The host drives it with fixed
//! time steps and draws the resulting outline and droplets.
//!
//! # Features
//!
//! - **Wave surface**: per-joint spring-damper integration plus lateral spread
//! - **Splashes**: nearest-joint impulse with width attenuation and droplet spray
//! - **Droplet pool**: arena + free-list, optional hard cap with oldest-first eviction
//! - **Contour**: closed, fillable polyline rebuilt each frame
//! - **Host loop**: fixed-step accumulator and falling bodies that splash
//! - **Observable**: monitor steps via the `StepObserver` trait, logs via `log`
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod joint;
pub mod surface;
pub mod droplet;
pub mod splash;
pub mod contour;
pub mod water;
pub mod host;
pub mod updatable;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use joint::WaveJoint;
pub use surface::SurfaceField;
pub use droplet::{Droplet, DropletId, DropletPool};
pub use splash::SplashSpawner;
pub use contour::Contour;
pub use water::{Rgba, SimulationState, WaterSimulation};
pub use host::{FallingBody, FixedTimestep, HostLoop};
pub use updatable::Updatable;
pub use config::{PhysicsConstants, WaterConfig};
pub use observer::{NoOpStepObserver, StepObserver, StepStats};
pub use error::WaterError;
