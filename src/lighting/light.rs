//! Light component data
//!
//! Pure data for light records:
//! - Components contain only data, no logic
//! - Derived values are computed by the store when parameters change
//! - Shape-specific state lives in a tagged variant so a record can never
//!   hold fields its shape does not have

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::config::LIGHT_CHANNEL_COUNT;
use crate::ecs::Entity;
use crate::foundation::math::Vec3;
use crate::lighting::cone::ConeParams;
use crate::lighting::shadow::ShadowOptions;

/// The shape of a light source
///
/// Fixed at creation time; every other parameter of a light can change
/// over its lifetime, but not its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightShape {
    /// Directional light that also renders a sun disc and halo
    Sun,
    /// Directional light with parallel rays and no position
    Directional,
    /// Point light radiating in all directions from a position
    Point,
    /// Cone light whose apparent brightness depends only on intensity
    Spot,
    /// Cone light that preserves total emitted power as the cone changes
    FocusedSpot,
}

impl LightShape {
    /// Whether the shape is directional (sun included)
    pub fn is_directional(self) -> bool {
        matches!(self, Self::Sun | Self::Directional)
    }

    /// Whether the shape carries spot cone state
    pub fn is_spot(self) -> bool {
        matches!(self, Self::Spot | Self::FocusedSpot)
    }

    /// Whether the shape renders the sun disc
    pub fn is_sun(self) -> bool {
        matches!(self, Self::Sun)
    }
}

bitflags! {
    /// Light channel membership mask
    ///
    /// Geometry only receives a light when the two share at least one
    /// channel. Eight channels exist; indices past the last are ignored
    /// by the channel setters.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct LightChannels: u8 {
        /// Channel 0, the default for new lights and new geometry
        const CHANNEL_0 = 1 << 0;
        /// Channel 1
        const CHANNEL_1 = 1 << 1;
        /// Channel 2
        const CHANNEL_2 = 1 << 2;
        /// Channel 3
        const CHANNEL_3 = 1 << 3;
        /// Channel 4
        const CHANNEL_4 = 1 << 4;
        /// Channel 5
        const CHANNEL_5 = 1 << 5;
        /// Channel 6
        const CHANNEL_6 = 1 << 6;
        /// Channel 7
        const CHANNEL_7 = 1 << 7;
    }
}

impl Default for LightChannels {
    fn default() -> Self {
        Self::CHANNEL_0
    }
}

impl LightChannels {
    /// Mask selecting a single channel, or `None` when the index is out
    /// of range
    pub fn channel(index: u32) -> Option<Self> {
        (index < LIGHT_CHANNEL_COUNT).then(|| Self::from_bits_truncate(1 << index))
    }
}

/// Distance falloff state for punctual lights
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct FalloffParams {
    /// Falloff radius in world units
    pub radius: f32,
    /// 1 / radius^2, or 0 when the radius is not positive
    pub squared_inverse: f32,
}

impl FalloffParams {
    /// Derive the reciprocal squared term from a radius
    pub fn from_radius(radius: f32) -> Self {
        let squared_inverse = if radius > 0.0 {
            1.0 / (radius * radius)
        } else {
            0.0
        };
        Self {
            radius,
            squared_inverse,
        }
    }
}

/// Sun disc and halo parameters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct SunParams {
    /// Angular radius of the sun disc in radians
    pub angular_radius: f32,
    /// Halo radius as a multiple of the disc radius
    pub halo_size: f32,
    /// Halo falloff exponent
    pub halo_falloff: f32,
}

/// Shape-specific light state
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ShapeParams {
    Sun(SunParams),
    Directional,
    Point {
        falloff: FalloffParams,
    },
    Spot {
        falloff: FalloffParams,
        cone: ConeParams,
    },
    FocusedSpot {
        falloff: FalloffParams,
        cone: ConeParams,
        /// Total luminous power in lumens, kept so cone changes can
        /// re-derive intensity without losing emitted power
        luminous_power: f32,
    },
}

impl ShapeParams {
    /// Fresh state for a record of the given shape
    pub fn new(shape: LightShape) -> Self {
        match shape {
            LightShape::Sun => Self::Sun(SunParams::default()),
            LightShape::Directional => Self::Directional,
            LightShape::Point => Self::Point {
                falloff: FalloffParams::default(),
            },
            LightShape::Spot => Self::Spot {
                falloff: FalloffParams::default(),
                cone: ConeParams::default(),
            },
            LightShape::FocusedSpot => Self::FocusedSpot {
                falloff: FalloffParams::default(),
                cone: ConeParams::default(),
                luminous_power: 0.0,
            },
        }
    }

    /// The shape tag for this state
    pub fn shape(&self) -> LightShape {
        match self {
            Self::Sun(_) => LightShape::Sun,
            Self::Directional => LightShape::Directional,
            Self::Point { .. } => LightShape::Point,
            Self::Spot { .. } => LightShape::Spot,
            Self::FocusedSpot { .. } => LightShape::FocusedSpot,
        }
    }

    /// Falloff state, present for punctual shapes only
    pub fn falloff(&self) -> Option<&FalloffParams> {
        match self {
            Self::Point { falloff }
            | Self::Spot { falloff, .. }
            | Self::FocusedSpot { falloff, .. } => Some(falloff),
            _ => None,
        }
    }

    /// Mutable falloff state, present for punctual shapes only
    pub fn falloff_mut(&mut self) -> Option<&mut FalloffParams> {
        match self {
            Self::Point { falloff }
            | Self::Spot { falloff, .. }
            | Self::FocusedSpot { falloff, .. } => Some(falloff),
            _ => None,
        }
    }

    /// Cone state, present for spot shapes only
    pub fn cone(&self) -> Option<&ConeParams> {
        match self {
            Self::Spot { cone, .. } | Self::FocusedSpot { cone, .. } => Some(cone),
            _ => None,
        }
    }

    /// Sun state, present for the sun shape only
    pub fn sun(&self) -> Option<&SunParams> {
        match self {
            Self::Sun(sun) => Some(sun),
            _ => None,
        }
    }

    /// Mutable sun state, present for the sun shape only
    pub fn sun_mut(&mut self) -> Option<&mut SunParams> {
        match self {
            Self::Sun(sun) => Some(sun),
            _ => None,
        }
    }
}

/// One live light component
///
/// Shared fields sit in the envelope; anything shape-specific lives in
/// [`ShapeParams`]. Records are created zeroed and then filled by the
/// store's setters.
#[derive(Debug, Clone)]
pub(crate) struct LightRecord {
    /// Owning entity, held as an unowned handle
    pub entity: Entity,
    /// Whether the light casts shadows
    pub cast_shadows: bool,
    /// Whether the light contributes lighting
    pub cast_light: bool,
    /// Channel membership
    pub channels: LightChannels,
    /// Position in local space
    pub position: Vec3,
    /// Direction in local space, stored as given
    pub direction: Vec3,
    /// Linear RGB color
    pub color: Vec3,
    /// Luminous intensity in candela, or illuminance in lux for
    /// directional shapes
    pub intensity: f32,
    /// Shadow parameters, stored pre-clamped
    pub shadow: ShadowOptions,
    /// Shape tag and shape-specific state
    pub shape_params: ShapeParams,
}

impl LightRecord {
    /// New record with zeroed shared fields
    pub fn new(
        entity: Entity,
        shape: LightShape,
        cast_shadows: bool,
        cast_light: bool,
        channels: LightChannels,
    ) -> Self {
        Self {
            entity,
            cast_shadows,
            cast_light,
            channels,
            position: Vec3::zeros(),
            direction: Vec3::zeros(),
            color: Vec3::zeros(),
            intensity: 0.0,
            shadow: ShadowOptions::default(),
            shape_params: ShapeParams::new(shape),
        }
    }
}
