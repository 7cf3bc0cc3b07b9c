//! Shadow cascade split computation
//!
//! Pure helpers that place the interior boundaries partitioning a view
//! frustum depth range into cascades. Splits are normalized to [0, 1]
//! over the near to far range; with the engine limit of four cascades
//! there are at most three interior boundaries.

/// Cascade count floor applied by every split helper
///
/// The helpers always partition for at least four cascades. This floor is
/// independent of the floor of one applied to stored cascade counts.
const MIN_SPLIT_CASCADES: u8 = 4;

/// Compute uniformly spaced split positions
///
/// Boundary `c` lands at `c / cascades`. Counts below four are raised to
/// four before partitioning.
pub fn compute_uniform_splits(split_positions: &mut [f32; 3], cascades: u8) {
    let cascades = f32::from(cascades.max(MIN_SPLIT_CASCADES));
    for (s, split) in split_positions.iter_mut().enumerate() {
        *split = (s + 1) as f32 / cascades;
    }
}

/// Compute logarithmically spaced split positions
///
/// Boundary `c` lands at the normalized depth of
/// `near * (far / near)^(c / cascades)`, which equalizes the depth ratio
/// covered by each cascade. `near` must be positive and `far` greater
/// than `near`. Counts below four are raised to four before partitioning.
pub fn compute_log_splits(split_positions: &mut [f32; 3], cascades: u8, near: f32, far: f32) {
    let cascades = f32::from(cascades.max(MIN_SPLIT_CASCADES));
    for (s, split) in split_positions.iter_mut().enumerate() {
        let c = (s + 1) as f32;
        *split = (near * (far / near).powf(c / cascades) - near) / (far - near);
    }
}

/// Compute practical split positions blending uniform and logarithmic
///
/// `lambda` in [0, 1] selects the blend: 0 reproduces the uniform
/// scheme exactly and 1 the logarithmic scheme exactly. Counts below
/// four are raised to four before partitioning.
pub fn compute_practical_splits(
    split_positions: &mut [f32; 3],
    cascades: u8,
    near: f32,
    far: f32,
    lambda: f32,
) {
    let mut uniform_splits = [0.0; 3];
    let mut log_splits = [0.0; 3];
    compute_uniform_splits(&mut uniform_splits, cascades);
    compute_log_splits(&mut log_splits, cascades, near, far);
    for (s, split) in split_positions.iter_mut().enumerate() {
        *split = lambda * log_splits[s] + (1.0 - lambda) * uniform_splits[s];
    }
}
