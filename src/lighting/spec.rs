//! Light specification
//!
//! A complete, immutable parameter set for one light. Specs are plain
//! data: construct one with struct update syntax or the chaining
//! helpers, then consume it once with [`LightSpec::build`]. Reusing a
//! spec for several lights is a `clone` away.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ecs::Entity;
use crate::foundation::math::constants::QUARTER_PI;
use crate::foundation::math::Vec3;
use crate::lighting::light::{LightChannels, LightShape};
use crate::lighting::manager::{LightInstance, LightManager};
use crate::lighting::photometry::{self, IntensityUnit};
use crate::lighting::shadow::ShadowOptions;

/// Error produced when building a light component fails
#[derive(Debug, Error)]
pub enum LightBuildError {
    /// The store could not allocate a record for the entity
    #[error("failed to allocate a light component for entity {}", .0.id())]
    Allocation(Entity),
}

/// Complete parameter set for one light component
///
/// Defaults describe a downward-pointing white directional light at
/// 100 000 lux. Parameters that do not apply to the chosen shape are
/// ignored at creation time, so a spec can be filled generically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightSpec {
    /// Light shape, fixed for the lifetime of the component
    pub shape: LightShape,
    /// Whether the light casts shadows
    pub cast_shadows: bool,
    /// Whether the light contributes lighting; disabling also zeroes the
    /// falloff radius at creation
    pub cast_light: bool,
    /// Channel membership mask
    pub channels: LightChannels,
    /// Position in local space
    pub position: Vec3,
    /// Direction in local space, stored without renormalization
    pub direction: Vec3,
    /// Linear RGB color
    pub color: Vec3,
    /// Declared intensity, interpreted per `intensity_unit`
    pub intensity: f32,
    /// Unit of `intensity`
    pub intensity_unit: IntensityUnit,
    /// Falloff radius in world units, punctual shapes only
    pub falloff: f32,
    /// Spot inner cone half-angle in radians
    pub spot_inner: f32,
    /// Spot outer cone half-angle in radians
    pub spot_outer: f32,
    /// Sun angular radius in degrees
    pub sun_angular_radius: f32,
    /// Sun halo radius as a multiple of the angular radius
    pub sun_halo_size: f32,
    /// Sun halo falloff exponent
    pub sun_halo_falloff: f32,
    /// Shadow mapping parameters
    pub shadow_options: ShadowOptions,
}

impl Default for LightSpec {
    fn default() -> Self {
        Self {
            shape: LightShape::Directional,
            cast_shadows: false,
            cast_light: true,
            channels: LightChannels::default(),
            position: Vec3::zeros(),
            direction: Vec3::new(0.0, -1.0, 0.0),
            color: Vec3::new(1.0, 1.0, 1.0),
            intensity: 100_000.0,
            intensity_unit: IntensityUnit::LumenLux,
            falloff: 1.0,
            spot_inner: QUARTER_PI * 0.75,
            spot_outer: QUARTER_PI,
            sun_angular_radius: 0.545,
            sun_halo_size: 10.0,
            sun_halo_falloff: 80.0,
            shadow_options: ShadowOptions::default(),
        }
    }
}

impl LightSpec {
    /// New spec with defaults for the given shape
    pub fn new(shape: LightShape) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }

    /// Set the intensity in lumens (lux for directional shapes)
    #[must_use]
    pub fn with_intensity(mut self, lumens: f32) -> Self {
        self.intensity = lumens;
        self.intensity_unit = IntensityUnit::LumenLux;
        self
    }

    /// Set the intensity directly in candela
    #[must_use]
    pub fn with_intensity_candela(mut self, candela: f32) -> Self {
        self.intensity = candela;
        self.intensity_unit = IntensityUnit::Candela;
        self
    }

    /// Set the intensity from electrical watts and luminous efficiency
    #[must_use]
    pub fn with_intensity_watts(mut self, watts: f32, efficiency: f32) -> Self {
        self.intensity = photometry::watts_to_lumens(watts, efficiency);
        self.intensity_unit = IntensityUnit::LumenLux;
        self
    }

    /// Set the spot cone half-angles in radians
    #[must_use]
    pub fn with_spot_cone(mut self, inner: f32, outer: f32) -> Self {
        self.spot_inner = inner;
        self.spot_outer = outer;
        self
    }

    /// Enable or disable membership in one light channel
    ///
    /// Channel indices of 8 or more are ignored.
    #[must_use]
    pub fn with_light_channel(mut self, channel: u32, enable: bool) -> Self {
        if let Some(mask) = LightChannels::channel(channel) {
            self.channels.set(mask, enable);
        }
        self
    }

    /// Create the light component for `entity` in `lights`
    ///
    /// Replaces any light the entity already owns. Creation currently
    /// cannot fail; the `Result` is part of the stable signature so
    /// callers handle allocation errors uniformly.
    pub fn build(
        self,
        lights: &mut LightManager,
        entity: Entity,
    ) -> Result<LightInstance, LightBuildError> {
        Ok(lights.create(&self, entity))
    }
}
