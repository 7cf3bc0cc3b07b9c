//! Spot cone attenuation
//!
//! Precomputes the coefficients that let shading evaluate spot angular
//! falloff with a single multiply, add and clamp per fragment.

use crate::foundation::math::constants::HALF_PI;
use crate::foundation::math::Vec2;

/// Floor applied to reciprocal cone terms so degenerate cones stay finite
const MIN_APERTURE: f32 = 1.0 / 1024.0;

/// Precomputed spot cone state
///
/// For a direction at angle theta from the light axis, the angular
/// attenuation is `clamp(cos(theta) * scale + offset, 0, 1)^2`, which is
/// 1 inside the inner cone and falls to 0 at the outer edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConeParams {
    /// Outer half-angle in radians, clamped to [0, pi/2]
    pub outer: f32,
    /// Squared cosine of the outer half-angle
    pub cos_outer_squared: f32,
    /// Reciprocal sine of the outer half-angle, floored so a closed cone
    /// stays finite
    pub sin_inverse: f32,
    /// Attenuation coefficients as (scale, offset)
    pub scale_offset: Vec2,
}

impl ConeParams {
    /// Solve cone coefficients from inner and outer half-angles
    ///
    /// Angles may have arbitrary sign and magnitude: absolute values are
    /// clamped to [0, pi/2] and the outer angle is raised to at least the
    /// inner angle. The attenuation scale is capped so cones with equal
    /// inner and outer angles keep a finite edge.
    pub fn solve(inner: f32, outer: f32) -> Self {
        let inner = inner.abs().min(HALF_PI);
        let outer = outer.abs().min(HALF_PI).max(inner);

        let cos_outer = outer.cos();
        let cos_inner = inner.cos();
        let cos_outer_squared = cos_outer * cos_outer;

        let scale = 1.0 / (cos_inner - cos_outer).max(MIN_APERTURE);
        let offset = -cos_outer * scale;

        // sin(outer) vanishes as the cone closes; floor it before inverting
        let sin_outer = (1.0 - cos_outer_squared).sqrt().max(MIN_APERTURE);

        Self {
            outer,
            cos_outer_squared,
            sin_inverse: 1.0 / sin_outer,
            scale_offset: Vec2::new(scale, offset),
        }
    }

    /// Cosine of the outer half-angle
    #[inline]
    pub fn cos_outer(&self) -> f32 {
        self.cos_outer_squared.sqrt()
    }

    /// Inner half-angle reconstructed from the stored coefficients
    ///
    /// The inner angle is not stored directly; it is recovered from the
    /// attenuation scale and the outer angle. Degenerate cones where the
    /// scale cap engaged reconstruct slightly below the requested angle.
    pub fn inner_angle(&self) -> f32 {
        let cos_inner = (1.0 / self.scale_offset.x + self.outer.cos()).clamp(-1.0, 1.0);
        cos_inner.acos()
    }

    /// Angular attenuation for a direction whose cosine against the light
    /// axis is `cos_theta`
    #[inline]
    pub fn angular_attenuation(&self, cos_theta: f32) -> f32 {
        let falloff = (cos_theta * self.scale_offset.x + self.scale_offset.y).clamp(0.0, 1.0);
        falloff * falloff
    }
}
