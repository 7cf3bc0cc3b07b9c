//! Engine limits for light components
//!
//! Build-time bounds applied when light parameters are stored. Values
//! outside these ranges are clamped, never rejected.

/// Maximum number of shadow cascades a single light may use
pub const MAX_SHADOW_CASCADES: u8 = 4;

/// Smallest supported shadow map resolution in texels
pub const MIN_SHADOW_MAP_SIZE: u32 = 8;

/// Largest supported shadow map resolution in texels
pub const MAX_SHADOW_MAP_SIZE: u32 = 2048;

/// Number of addressable light channels
pub const LIGHT_CHANNEL_COUNT: u32 = 8;

/// Smallest allowed sun angular radius in degrees
pub const MIN_SUN_ANGULAR_RADIUS: f32 = 0.25;

/// Largest allowed sun angular radius in degrees
pub const MAX_SUN_ANGULAR_RADIUS: f32 = 20.0;
