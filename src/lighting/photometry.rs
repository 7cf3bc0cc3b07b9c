//! Photometric conversion
//!
//! Maps user-facing photometric values (luminous power, illuminance,
//! luminous intensity) into the single internal intensity stored on a
//! light record. The conversion depends on the light shape and, for
//! focused spots, on the solid angle of the cone.

use serde::{Deserialize, Serialize};

use crate::foundation::math::constants::{PI, TAU};
use crate::lighting::light::LightShape;

/// Peak photopic luminous efficacy in lumens per watt, at 555 nm
pub const PEAK_LUMINOUS_EFFICACY: f32 = 683.0;

/// Unit of a user-supplied intensity value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IntensityUnit {
    /// Luminous power in lumens for punctual lights, illuminance in lux
    /// for directional lights
    #[default]
    LumenLux,
    /// Luminous intensity in candela, stored unchanged
    Candela,
}

/// Convert a declared photometric value into internal luminous intensity
///
/// `cos_outer` is the cosine of the spot outer half-angle. It only
/// participates for [`LightShape::FocusedSpot`], whose emission solid
/// angle depends on the cone. Directional shapes treat the value as lux
/// regardless of the requested unit.
pub fn luminous_intensity(value: f32, unit: IntensityUnit, shape: LightShape, cos_outer: f32) -> f32 {
    match (shape, unit) {
        (LightShape::Sun | LightShape::Directional, _) => value,
        (LightShape::Point, IntensityUnit::LumenLux) => value / (4.0 * PI),
        (LightShape::Spot, IntensityUnit::LumenLux) => value / PI,
        (LightShape::FocusedSpot, IntensityUnit::LumenLux) => {
            focused_spot_luminous_intensity(value, cos_outer)
        }
        (_, IntensityUnit::Candela) => value,
    }
}

/// Luminous intensity of a focused spot emitting `power` lumens through
/// a cone with the given outer-angle cosine
pub fn focused_spot_luminous_intensity(power: f32, cos_outer: f32) -> f32 {
    power / (TAU * (1.0 - cos_outer))
}

/// Total luminous power of a focused spot with the given intensity and
/// outer-angle cosine
///
/// Inverse of [`focused_spot_luminous_intensity`].
pub fn focused_spot_luminous_power(intensity: f32, cos_outer: f32) -> f32 {
    intensity * (TAU * (1.0 - cos_outer))
}

/// Convert electrical power and luminous efficiency into lumens
pub fn watts_to_lumens(watts: f32, efficiency: f32) -> f32 {
    PEAK_LUMINOUS_EFFICACY * efficiency * watts
}
