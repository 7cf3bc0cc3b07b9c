//! Light component store
//!
//! Owns every light record in a scene and derives the shading-ready
//! values (internal intensity, cone coefficients, falloff terms) whenever
//! a user-facing parameter changes. Records are stored densely so systems
//! can walk live lights without touching holes; a side lookup maps owning
//! entities to their instance handles.

use std::collections::HashMap;

use slotmap::DenseSlotMap;

use crate::config::{MAX_SUN_ANGULAR_RADIUS, MIN_SUN_ANGULAR_RADIUS};
use crate::ecs::Entity;
use crate::foundation::math::utils::{deg_to_rad, rad_to_deg};
use crate::foundation::math::Vec3;
use crate::lighting::cone::ConeParams;
use crate::lighting::light::{FalloffParams, LightChannels, LightRecord, LightShape, ShapeParams};
use crate::lighting::photometry::{self, IntensityUnit};
use crate::lighting::shadow::ShadowOptions;
use crate::lighting::spec::LightSpec;

slotmap::new_key_type! {
    /// Handle to a light record
    ///
    /// Valid while the owning entity keeps its light component; a handle
    /// to a destroyed component misses cleanly. `LightInstance::default()`
    /// is the null handle. Every operation accepts an invalid handle:
    /// setters become no-ops and getters return the type's default.
    pub struct LightInstance;
}

/// Component store for scene lights
///
/// All mutation is synchronous and single-threaded; shared references
/// may be read from many threads between mutations.
#[derive(Debug, Default)]
pub struct LightManager {
    records: DenseSlotMap<LightInstance, LightRecord>,
    instances: HashMap<Entity, LightInstance>,
}

impl LightManager {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a light component for `entity` from `spec`
    ///
    /// An existing component on the same entity is destroyed first, so an
    /// entity owns at most one light. Derived fields are written in
    /// dependency order; in particular the spot cone is solved before the
    /// intensity conversion, which needs the outer-angle cosine for
    /// focused spots.
    pub fn create(&mut self, spec: &LightSpec, entity: Entity) -> LightInstance {
        if self.has_component(entity) {
            self.destroy(entity);
        }

        let record = LightRecord::new(
            entity,
            spec.shape,
            spec.cast_shadows,
            spec.cast_light,
            spec.channels,
        );
        let i = self.records.insert(record);
        self.instances.insert(entity, i);

        self.set_shadow_options(i, spec.shadow_options);
        self.set_position(i, spec.position);
        self.set_direction(i, spec.direction);
        self.set_color(i, spec.color);
        // cone first: focused-spot intensity needs the outer-angle cosine
        self.set_spot_light_cone(i, spec.spot_inner, spec.spot_outer);
        self.set_intensity(i, spec.intensity, spec.intensity_unit);
        self.set_falloff(i, if spec.cast_light { spec.falloff } else { 0.0 });
        self.set_sun_angular_radius(i, spec.sun_angular_radius);
        self.set_sun_halo_size(i, spec.sun_halo_size);
        self.set_sun_halo_falloff(i, spec.sun_halo_falloff);
        i
    }

    /// Remove the light component owned by `entity`, if any
    pub fn destroy(&mut self, entity: Entity) {
        if let Some(i) = self.instances.remove(&entity) {
            self.records.remove(i);
        }
    }

    /// Force-remove every remaining component
    ///
    /// Components still alive here were leaked by their owners; the count
    /// is reported for diagnostics.
    pub fn terminate(&mut self) {
        if !self.records.is_empty() {
            log::debug!(
                "cleaning up {} leaked light components",
                self.records.len()
            );
            self.instances.clear();
            self.records.clear();
        }
    }

    /// Per-frame hook for renderer-facing preparation
    ///
    /// Nothing to do yet; GPU buffer packing lives with the renderer.
    pub fn prepare(&self) {}

    /// Whether `entity` currently owns a light component
    pub fn has_component(&self, entity: Entity) -> bool {
        self.instances.contains_key(&entity)
    }

    /// Instance handle for `entity`'s light, or the null handle when the
    /// entity has none
    pub fn instance(&self, entity: Entity) -> LightInstance {
        self.instances.get(&entity).copied().unwrap_or_default()
    }

    /// Number of live light components
    pub fn component_count(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no components
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over every entity that owns a light component
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.records.values().map(|record| record.entity)
    }

    fn record(&self, i: LightInstance) -> Option<&LightRecord> {
        self.records.get(i)
    }

    fn record_mut(&mut self, i: LightInstance) -> Option<&mut LightRecord> {
        self.records.get_mut(i)
    }

    /// Shape of the light; `Directional` for invalid handles
    pub fn shape(&self, i: LightInstance) -> LightShape {
        self.record(i)
            .map_or(LightShape::Directional, |r| r.shape_params.shape())
    }

    /// Whether the light casts shadows
    pub fn is_shadow_caster(&self, i: LightInstance) -> bool {
        self.record(i).map_or(false, |r| r.cast_shadows)
    }

    /// Enable or disable shadow casting
    pub fn set_shadow_caster(&mut self, i: LightInstance, cast_shadows: bool) {
        if let Some(record) = self.record_mut(i) {
            record.cast_shadows = cast_shadows;
        }
    }

    /// Whether the light contributes lighting
    pub fn is_light_caster(&self, i: LightInstance) -> bool {
        self.record(i).map_or(false, |r| r.cast_light)
    }

    /// Enable or disable the light's contribution
    pub fn set_light_caster(&mut self, i: LightInstance, cast_light: bool) {
        if let Some(record) = self.record_mut(i) {
            record.cast_light = cast_light;
        }
    }

    /// Store shadow options with every field clamped to engine limits
    pub fn set_shadow_options(&mut self, i: LightInstance, options: ShadowOptions) {
        if let Some(record) = self.record_mut(i) {
            record.shadow = options.clamped();
        }
    }

    /// Stored shadow options; defaults for invalid handles
    pub fn shadow_options(&self, i: LightInstance) -> ShadowOptions {
        self.record(i).map_or_else(ShadowOptions::default, |r| r.shadow)
    }

    /// Set the light position in local space
    pub fn set_position(&mut self, i: LightInstance, position: Vec3) {
        if let Some(record) = self.record_mut(i) {
            record.position = position;
        }
    }

    /// Light position in local space; zero for invalid handles
    pub fn position(&self, i: LightInstance) -> Vec3 {
        self.record(i).map_or_else(Vec3::zeros, |r| r.position)
    }

    /// Set the light direction in local space
    ///
    /// The direction is stored as given, without renormalization.
    pub fn set_direction(&mut self, i: LightInstance, direction: Vec3) {
        if let Some(record) = self.record_mut(i) {
            record.direction = direction;
        }
    }

    /// Light direction in local space; zero for invalid handles
    pub fn direction(&self, i: LightInstance) -> Vec3 {
        self.record(i).map_or_else(Vec3::zeros, |r| r.direction)
    }

    /// Set the linear RGB color
    pub fn set_color(&mut self, i: LightInstance, color: Vec3) {
        if let Some(record) = self.record_mut(i) {
            record.color = color;
        }
    }

    /// Linear RGB color; zero for invalid handles
    pub fn color(&self, i: LightInstance) -> Vec3 {
        self.record(i).map_or_else(Vec3::zeros, |r| r.color)
    }

    /// Set the intensity from a declared value and unit
    ///
    /// The stored value is the luminous intensity derived for the
    /// record's shape. Focused spots also keep the total luminous power
    /// so later cone changes preserve emitted power.
    pub fn set_intensity(&mut self, i: LightInstance, value: f32, unit: IntensityUnit) {
        if let Some(record) = self.record_mut(i) {
            let shape = record.shape_params.shape();
            let cos_outer = record.shape_params.cone().map_or(0.0, ConeParams::cos_outer);
            record.intensity = photometry::luminous_intensity(value, unit, shape, cos_outer);
            if let ShapeParams::FocusedSpot { luminous_power, .. } = &mut record.shape_params {
                *luminous_power = match unit {
                    IntensityUnit::LumenLux => value,
                    IntensityUnit::Candela => {
                        photometry::focused_spot_luminous_power(record.intensity, cos_outer)
                    }
                };
            }
        }
    }

    /// Internal luminous intensity in candela (lux for directional
    /// shapes); 0 for invalid handles
    pub fn intensity(&self, i: LightInstance) -> f32 {
        self.record(i).map_or(0.0, |r| r.intensity)
    }

    /// Set the falloff radius for punctual lights
    ///
    /// Directional shapes have no falloff; the call is ignored for them.
    pub fn set_falloff(&mut self, i: LightInstance, radius: f32) {
        if let Some(record) = self.record_mut(i) {
            if let Some(falloff) = record.shape_params.falloff_mut() {
                *falloff = FalloffParams::from_radius(radius);
            }
        }
    }

    /// Falloff radius; 0 for directional shapes and invalid handles
    pub fn falloff(&self, i: LightInstance) -> f32 {
        self.record(i)
            .and_then(|r| r.shape_params.falloff())
            .map_or(0.0, |f| f.radius)
    }

    /// Reciprocal squared falloff radius used by shading; 0 when the
    /// radius is not positive
    pub fn squared_falloff_inv(&self, i: LightInstance) -> f32 {
        self.record(i)
            .and_then(|r| r.shape_params.falloff())
            .map_or(0.0, |f| f.squared_inverse)
    }

    /// Set the spot cone half-angles in radians
    ///
    /// Applies to spot shapes only. For focused spots the intensity is
    /// re-derived from the stored luminous power and the new outer angle,
    /// preserving total emitted power rather than peak intensity.
    pub fn set_spot_light_cone(&mut self, i: LightInstance, inner: f32, outer: f32) {
        if let Some(record) = self.record_mut(i) {
            match &mut record.shape_params {
                ShapeParams::Spot { cone, .. } => {
                    *cone = ConeParams::solve(inner, outer);
                }
                ShapeParams::FocusedSpot {
                    cone,
                    luminous_power,
                    ..
                } => {
                    *cone = ConeParams::solve(inner, outer);
                    record.intensity = photometry::focused_spot_luminous_intensity(
                        *luminous_power,
                        cone.cos_outer(),
                    );
                }
                _ => {}
            }
        }
    }

    /// Outer cone half-angle after clamping; 0 for non-spot shapes
    pub fn spot_light_outer_cone(&self, i: LightInstance) -> f32 {
        self.record(i)
            .and_then(|r| r.shape_params.cone())
            .map_or(0.0, |c| c.outer)
    }

    /// Inner cone half-angle reconstructed from the stored coefficients;
    /// 0 for non-spot shapes
    pub fn spot_light_inner_cone(&self, i: LightInstance) -> f32 {
        self.record(i)
            .and_then(|r| r.shape_params.cone())
            .map_or(0.0, ConeParams::inner_angle)
    }

    /// Precomputed cone state; zeroed for non-spot shapes
    pub fn spot_cone_params(&self, i: LightInstance) -> ConeParams {
        self.record(i)
            .and_then(|r| r.shape_params.cone())
            .copied()
            .unwrap_or_default()
    }

    /// Set the sun angular radius in degrees
    ///
    /// Clamped to [0.25, 20] degrees and stored in radians. Ignored for
    /// shapes other than the sun.
    pub fn set_sun_angular_radius(&mut self, i: LightInstance, degrees: f32) {
        if let Some(record) = self.record_mut(i) {
            if let Some(sun) = record.shape_params.sun_mut() {
                sun.angular_radius =
                    deg_to_rad(degrees.clamp(MIN_SUN_ANGULAR_RADIUS, MAX_SUN_ANGULAR_RADIUS));
            }
        }
    }

    /// Sun angular radius in degrees; 0 for non-sun shapes
    pub fn sun_angular_radius(&self, i: LightInstance) -> f32 {
        self.record(i)
            .and_then(|r| r.shape_params.sun())
            .map_or(0.0, |s| rad_to_deg(s.angular_radius))
    }

    /// Set the sun halo radius as a multiple of the angular radius
    ///
    /// Ignored for shapes other than the sun.
    pub fn set_sun_halo_size(&mut self, i: LightInstance, halo_size: f32) {
        if let Some(record) = self.record_mut(i) {
            if let Some(sun) = record.shape_params.sun_mut() {
                sun.halo_size = halo_size;
            }
        }
    }

    /// Sun halo size; 0 for non-sun shapes
    pub fn sun_halo_size(&self, i: LightInstance) -> f32 {
        self.record(i)
            .and_then(|r| r.shape_params.sun())
            .map_or(0.0, |s| s.halo_size)
    }

    /// Set the sun halo falloff exponent
    ///
    /// Ignored for shapes other than the sun.
    pub fn set_sun_halo_falloff(&mut self, i: LightInstance, halo_falloff: f32) {
        if let Some(record) = self.record_mut(i) {
            if let Some(sun) = record.shape_params.sun_mut() {
                sun.halo_falloff = halo_falloff;
            }
        }
    }

    /// Sun halo falloff exponent; 0 for non-sun shapes
    pub fn sun_halo_falloff(&self, i: LightInstance) -> f32 {
        self.record(i)
            .and_then(|r| r.shape_params.sun())
            .map_or(0.0, |s| s.halo_falloff)
    }

    /// Enable or disable membership in one light channel
    ///
    /// Channel indices of 8 or more are ignored.
    pub fn set_light_channel(&mut self, i: LightInstance, channel: u32, enable: bool) {
        if let Some(record) = self.record_mut(i) {
            if let Some(mask) = LightChannels::channel(channel) {
                record.channels.set(mask, enable);
            }
        }
    }

    /// Whether the light belongs to `channel`; false for out-of-range
    /// indices and invalid handles
    pub fn light_channel(&self, i: LightInstance, channel: u32) -> bool {
        match (self.record(i), LightChannels::channel(channel)) {
            (Some(record), Some(mask)) => record.channels.contains(mask),
            _ => false,
        }
    }

    /// Full channel membership mask; empty for invalid handles
    pub fn channels(&self, i: LightInstance) -> LightChannels {
        self.record(i).map_or(LightChannels::empty(), |r| r.channels)
    }
}

impl Drop for LightManager {
    fn drop(&mut self) {
        // owners are expected to terminate() before dropping the store
        if !std::thread::panicking() {
            debug_assert!(
                self.records.is_empty(),
                "LightManager dropped with {} live light components; call terminate() first",
                self.records.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::EntityRegistry;
    use crate::foundation::math::constants::TAU;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-4;

    fn point_spec(candela: f32) -> LightSpec {
        LightSpec {
            intensity: candela,
            intensity_unit: IntensityUnit::Candela,
            ..LightSpec::new(LightShape::Point)
        }
    }

    #[test]
    fn test_create_and_destroy_round_trip() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        let entity = registry.create();

        let i = lights.create(&LightSpec::new(LightShape::Point), entity);
        assert!(lights.has_component(entity));
        assert_eq!(lights.component_count(), 1);
        assert_eq!(lights.instance(entity), i);
        assert_eq!(lights.shape(i), LightShape::Point);
        lights.prepare();

        lights.destroy(entity);
        assert!(!lights.has_component(entity));
        assert!(lights.is_empty());

        lights.terminate();
    }

    #[test]
    fn test_envelope_fields_round_trip() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        let entity = registry.create();

        let i = lights.create(&point_spec(1.0), entity);
        // spec defaults flow into the record
        assert_eq!(lights.direction(i), Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(lights.color(i), Vec3::new(1.0, 1.0, 1.0));

        lights.set_position(i, Vec3::new(1.0, 2.0, 3.0));
        lights.set_direction(i, Vec3::new(0.0, 0.0, -1.0));
        lights.set_color(i, Vec3::new(0.9, 0.8, 0.7));
        assert_eq!(lights.position(i), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(lights.direction(i), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(lights.color(i), Vec3::new(0.9, 0.8, 0.7));

        lights.terminate();
    }

    #[test]
    fn test_create_replaces_an_existing_component() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        let entity = registry.create();

        let first = lights.create(&point_spec(100.0), entity);
        let second = lights.create(&point_spec(7.0), entity);

        assert_eq!(lights.component_count(), 1);
        assert_relative_eq!(lights.intensity(second), 7.0, epsilon = EPSILON);
        // the first handle now misses; its getters fall back to defaults
        assert_ne!(first, second);
        assert_relative_eq!(lights.intensity(first), 0.0, epsilon = EPSILON);

        lights.terminate();
    }

    #[test]
    fn test_destroy_without_component_is_a_no_op() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        let entity = registry.create();

        lights.destroy(entity);
        assert!(lights.is_empty());

        lights.terminate();
    }

    #[test]
    fn test_store_stays_consistent_after_interior_removal() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        let e1 = registry.create();
        let e2 = registry.create();
        let e3 = registry.create();

        lights.create(&point_spec(1.0), e1);
        lights.create(&point_spec(2.0), e2);
        lights.create(&point_spec(3.0), e3);

        lights.destroy(e2);

        assert_eq!(lights.component_count(), 2);
        assert_relative_eq!(lights.intensity(lights.instance(e1)), 1.0, epsilon = EPSILON);
        assert_relative_eq!(lights.intensity(lights.instance(e3)), 3.0, epsilon = EPSILON);

        let mut entities: Vec<u32> = lights.entities().map(|e| e.id()).collect();
        entities.sort_unstable();
        assert_eq!(entities, vec![e1.id(), e3.id()]);

        lights.terminate();
    }

    #[test]
    fn test_stale_handles_miss_cleanly() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        let entity = registry.create();

        let i = lights.create(&point_spec(10.0), entity);
        lights.destroy(entity);

        assert_relative_eq!(lights.intensity(i), 0.0, epsilon = EPSILON);
        lights.set_intensity(i, 99.0, IntensityUnit::Candela);
        assert!(lights.is_empty());

        lights.terminate();
    }

    #[test]
    fn test_invalid_handle_getters_return_defaults() {
        let mut registry = EntityRegistry::new();
        let lights = LightManager::new();
        let absent = registry.create();

        let i = lights.instance(absent);
        assert_eq!(lights.shape(i), LightShape::Directional);
        assert_eq!(lights.position(i), Vec3::zeros());
        assert_eq!(lights.intensity(i), 0.0);
        assert!(!lights.is_shadow_caster(i));
        assert!(!lights.is_light_caster(i));
        assert_eq!(lights.channels(i), LightChannels::empty());
        assert_eq!(lights.shadow_options(i), ShadowOptions::default());
    }

    #[test]
    fn test_point_light_converts_lumens_on_creation() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        let entity = registry.create();

        let spec = LightSpec {
            intensity: 4.0 * std::f32::consts::PI,
            ..LightSpec::new(LightShape::Point)
        };
        let i = lights.create(&spec, entity);
        assert_relative_eq!(lights.intensity(i), 1.0, epsilon = EPSILON);

        lights.terminate();
    }

    #[test]
    fn test_focused_spot_conversion_uses_the_cone_from_the_spec() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        let entity = registry.create();

        let spec = LightSpec {
            intensity: 1000.0,
            spot_inner: 0.3,
            spot_outer: 0.5,
            ..LightSpec::new(LightShape::FocusedSpot)
        };
        let i = lights.create(&spec, entity);

        let expected = 1000.0 / (TAU * (1.0 - 0.5_f32.cos()));
        assert_relative_eq!(lights.intensity(i), expected, epsilon = expected * 1e-4);

        lights.terminate();
    }

    #[test]
    fn test_focused_spot_cone_change_preserves_luminous_power() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        let entity = registry.create();

        let spec = LightSpec {
            intensity: 1000.0,
            intensity_unit: IntensityUnit::Candela,
            spot_inner: 0.4,
            spot_outer: 0.6,
            ..LightSpec::new(LightShape::FocusedSpot)
        };
        let i = lights.create(&spec, entity);
        assert_relative_eq!(lights.intensity(i), 1000.0, epsilon = EPSILON);

        lights.set_spot_light_cone(i, 0.2, 0.8);

        // power through the old cone redistributed over the new one
        let expected = 1000.0 * (1.0 - 0.6_f32.cos()) / (1.0 - 0.8_f32.cos());
        assert_relative_eq!(lights.intensity(i), expected, epsilon = expected * 1e-3);
        assert!((lights.intensity(i) - 1000.0).abs() > 100.0);

        lights.terminate();
    }

    #[test]
    fn test_spot_cone_angles_round_trip_through_the_store() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        let entity = registry.create();

        let i = lights.create(&LightSpec::new(LightShape::Spot), entity);
        lights.set_spot_light_cone(i, 0.3, 0.5);

        assert_relative_eq!(lights.spot_light_outer_cone(i), 0.5, epsilon = EPSILON);
        assert_relative_eq!(lights.spot_light_inner_cone(i), 0.3, epsilon = EPSILON);

        let cone = lights.spot_cone_params(i);
        assert_relative_eq!(cone.outer, 0.5, epsilon = EPSILON);
        assert!(cone.cos_outer_squared > 0.0 && cone.cos_outer_squared <= 1.0);

        lights.terminate();
    }

    #[test]
    fn test_cone_setter_is_ignored_for_non_spot_shapes() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        let entity = registry.create();

        let i = lights.create(&point_spec(10.0), entity);
        lights.set_spot_light_cone(i, 0.3, 0.5);

        assert_eq!(lights.spot_light_outer_cone(i), 0.0);
        assert_relative_eq!(lights.intensity(i), 10.0, epsilon = EPSILON);

        lights.terminate();
    }

    #[test]
    fn test_falloff_stores_radius_and_inverse_square() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        let entity = registry.create();

        let spec = LightSpec {
            falloff: 2.0,
            ..point_spec(10.0)
        };
        let i = lights.create(&spec, entity);
        assert_relative_eq!(lights.falloff(i), 2.0, epsilon = EPSILON);
        assert_relative_eq!(lights.squared_falloff_inv(i), 0.25, epsilon = EPSILON);

        lights.set_falloff(i, 0.0);
        assert_eq!(lights.squared_falloff_inv(i), 0.0);

        lights.terminate();
    }

    #[test]
    fn test_falloff_is_ignored_for_directional_shapes() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        let entity = registry.create();

        let i = lights.create(&LightSpec::new(LightShape::Directional), entity);
        lights.set_falloff(i, 5.0);
        assert_eq!(lights.falloff(i), 0.0);

        lights.terminate();
    }

    #[test]
    fn test_disabled_light_caster_zeroes_falloff_on_creation() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        let entity = registry.create();

        let spec = LightSpec {
            cast_light: false,
            falloff: 5.0,
            ..point_spec(10.0)
        };
        let i = lights.create(&spec, entity);
        assert_eq!(lights.falloff(i), 0.0);
        assert!(!lights.is_light_caster(i));

        lights.terminate();
    }

    #[test]
    fn test_sun_angular_radius_round_trips_in_degrees() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        let entity = registry.create();

        let spec = LightSpec {
            sun_angular_radius: 10.0,
            ..LightSpec::new(LightShape::Sun)
        };
        let i = lights.create(&spec, entity);
        assert_relative_eq!(lights.sun_angular_radius(i), 10.0, epsilon = EPSILON);

        lights.set_sun_angular_radius(i, 0.1);
        assert_relative_eq!(lights.sun_angular_radius(i), 0.25, epsilon = EPSILON);

        lights.set_sun_angular_radius(i, 45.0);
        assert_relative_eq!(lights.sun_angular_radius(i), 20.0, epsilon = EPSILON);

        lights.terminate();
    }

    #[test]
    fn test_sun_parameters_default_from_the_spec() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        let entity = registry.create();

        let i = lights.create(&LightSpec::new(LightShape::Sun), entity);
        assert_relative_eq!(lights.sun_angular_radius(i), 0.545, epsilon = EPSILON);
        assert_relative_eq!(lights.sun_halo_size(i), 10.0, epsilon = EPSILON);
        assert_relative_eq!(lights.sun_halo_falloff(i), 80.0, epsilon = EPSILON);

        lights.terminate();
    }

    #[test]
    fn test_sun_setters_are_ignored_for_other_shapes() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        let entity = registry.create();

        let i = lights.create(&LightSpec::new(LightShape::Directional), entity);
        lights.set_sun_angular_radius(i, 5.0);
        lights.set_sun_halo_size(i, 22.0);
        assert_eq!(lights.sun_angular_radius(i), 0.0);
        assert_eq!(lights.sun_halo_size(i), 0.0);

        lights.terminate();
    }

    #[test]
    fn test_shadow_options_are_clamped_when_stored() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        let entity = registry.create();

        let i = lights.create(&LightSpec::new(LightShape::Sun), entity);
        lights.set_shadow_options(
            i,
            ShadowOptions {
                map_size: 4,
                cascades: 9,
                ..Default::default()
            },
        );

        let stored = lights.shadow_options(i);
        assert_eq!(stored.map_size, 8);
        assert_eq!(stored.cascades, 4);

        lights.terminate();
    }

    #[test]
    fn test_light_channels_default_and_update() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        let entity = registry.create();

        let i = lights.create(&point_spec(1.0), entity);
        assert!(lights.light_channel(i, 0));
        assert!(!lights.light_channel(i, 1));

        lights.set_light_channel(i, 3, true);
        lights.set_light_channel(i, 0, false);
        assert!(lights.light_channel(i, 3));
        assert!(!lights.light_channel(i, 0));

        lights.terminate();
    }

    #[test]
    fn test_out_of_range_channels_are_ignored() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        let entity = registry.create();

        let i = lights.create(&point_spec(1.0), entity);
        lights.set_light_channel(i, 9, true);
        assert!(!lights.light_channel(i, 9));
        assert_eq!(lights.channels(i), LightChannels::CHANNEL_0);

        lights.terminate();
    }

    #[test]
    fn test_shadow_and_light_caster_toggles() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        let entity = registry.create();

        let spec = LightSpec {
            cast_shadows: true,
            ..LightSpec::new(LightShape::Sun)
        };
        let i = lights.create(&spec, entity);
        assert!(lights.is_shadow_caster(i));
        assert!(lights.is_light_caster(i));

        lights.set_shadow_caster(i, false);
        lights.set_light_caster(i, false);
        assert!(!lights.is_shadow_caster(i));
        assert!(!lights.is_light_caster(i));

        lights.terminate();
    }

    #[test]
    fn test_terminate_clears_leaked_components_and_is_idempotent() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        lights.create(&point_spec(1.0), registry.create());
        lights.create(&point_spec(2.0), registry.create());

        lights.terminate();
        assert!(lights.is_empty());
        lights.terminate();
        assert!(lights.is_empty());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "live light components")]
    fn test_dropping_a_non_empty_store_panics_in_debug() {
        let mut registry = EntityRegistry::new();
        let mut lights = LightManager::new();
        lights.create(&point_spec(1.0), registry.create());
        drop(lights);
    }
}
