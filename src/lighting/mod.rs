//! Scene lighting subsystem
//!
//! Light components, the store that owns them, and the photometric and
//! geometric math that turns user-facing parameters into shading-ready
//! values:
//! - [`LightSpec`] declares a light; [`LightManager`] stores it
//! - [`photometry`] converts lumens, lux, candela and watts
//! - [`cone`] solves spot cone attenuation coefficients
//! - [`cascades`] places shadow cascade split boundaries

pub mod cascades;
pub mod cone;
pub mod light;
pub mod manager;
pub mod photometry;
pub mod shadow;
pub mod spec;

pub use cone::ConeParams;
pub use light::{LightChannels, LightShape};
pub use manager::{LightInstance, LightManager};
pub use photometry::IntensityUnit;
pub use shadow::{ShadowOptions, VsmOptions};
pub use spec::{LightBuildError, LightSpec};
