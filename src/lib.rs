//! # Light Engine
//!
//! Scene light management for a modular rendering engine.
//!
//! ## Features
//!
//! - **Light Components**: Dense per-entity storage with generational handles
//! - **Photometric Units**: Lumens, lux, candela and watt conversions
//! - **Spot Cones**: Precomputed attenuation coefficients for shading
//! - **Shadow Cascades**: Uniform, logarithmic and practical split schemes
//! - **Data-Driven Specs**: Serializable light descriptions
//!
//! ## Quick Start
//!
//! ```rust
//! use light_engine::prelude::*;
//!
//! let mut registry = EntityRegistry::new();
//! let mut lights = LightManager::new();
//!
//! let sun = registry.create();
//! LightSpec {
//!     cast_shadows: true,
//!     intensity: 110_000.0,
//!     ..LightSpec::new(LightShape::Sun)
//! }
//! .build(&mut lights, sun)
//! .expect("light creation is infallible");
//!
//! let instance = lights.instance(sun);
//! assert!(lights.is_shadow_caster(instance));
//! assert_eq!(lights.component_count(), 1);
//!
//! lights.terminate();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod ecs;
pub mod foundation;
pub mod lighting;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        ecs::{Entity, EntityRegistry},
        foundation::math::Vec3,
        lighting::{
            ConeParams, IntensityUnit, LightBuildError, LightChannels, LightInstance,
            LightManager, LightShape, LightSpec, ShadowOptions, VsmOptions,
        },
    };
}
