//! Shadow parameters for light components
//!
//! Options are plain data; the store clamps them on write so every
//! stored value is already within engine limits.

use serde::{Deserialize, Serialize};

use crate::config::{MAX_SHADOW_CASCADES, MAX_SHADOW_MAP_SIZE, MIN_SHADOW_MAP_SIZE};

/// Variance shadow map options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VsmOptions {
    /// MSAA sample count used when rendering the variance map
    pub msaa_samples: u8,
    /// Blur kernel width in texels, 0 disables the blur pass
    pub blur_width: f32,
}

impl Default for VsmOptions {
    fn default() -> Self {
        Self {
            msaa_samples: 1,
            blur_width: 0.0,
        }
    }
}

/// Per-light shadow mapping parameters
///
/// Every field is clamped independently when stored; out-of-range input
/// is never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowOptions {
    /// Shadow map resolution in texels, clamped between
    /// [`MIN_SHADOW_MAP_SIZE`] and [`MAX_SHADOW_MAP_SIZE`]
    pub map_size: u32,
    /// Number of cascades, clamped between 1 and [`MAX_SHADOW_CASCADES`]
    pub cascades: u8,
    /// Constant depth bias, clamped to [0, 2]
    pub constant_bias: f32,
    /// Bias along the surface normal, clamped to [0, 3]
    pub normal_bias: f32,
    /// Distance beyond which shadows are not rendered, 0 uses the camera
    /// far plane
    pub far_distance: f32,
    /// Hint for the nearest shadow-relevant depth, never negative
    pub near_hint: f32,
    /// Hint for the farthest shadow-relevant depth, never negative
    pub far_hint: f32,
    /// Variance shadow map options
    pub vsm: VsmOptions,
}

impl Default for ShadowOptions {
    fn default() -> Self {
        Self {
            map_size: 1024,
            cascades: 1,
            constant_bias: 0.05,
            normal_bias: 0.4,
            far_distance: 0.0,
            near_hint: 1.0,
            far_hint: 100.0,
            vsm: VsmOptions::default(),
        }
    }
}

impl ShadowOptions {
    /// Copy with every field clamped to its valid range
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            map_size: self.map_size.clamp(MIN_SHADOW_MAP_SIZE, MAX_SHADOW_MAP_SIZE),
            cascades: self.cascades.clamp(1, MAX_SHADOW_CASCADES),
            constant_bias: self.constant_bias.clamp(0.0, 2.0),
            normal_bias: self.normal_bias.clamp(0.0, 3.0),
            far_distance: self.far_distance.max(0.0),
            near_hint: self.near_hint.max(0.0),
            far_hint: self.far_hint.max(0.0),
            vsm: VsmOptions {
                msaa_samples: self.vsm.msaa_samples,
                blur_width: self.vsm.blur_width.max(0.0),
            },
        }
    }
}
