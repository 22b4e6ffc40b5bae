use glam::Vec3;

/// Unit vector pointing from `from` to `to`, paired with the distance between them.
///
/// Returns `None` when the points coincide, since no direction exists.
pub fn direction_to(from: Vec3, to: Vec3) -> Option<(Vec3, f32)> {
    let delta = to - from;
    let distance = delta.length();
    if distance > 0.0 {
        Some((delta / distance, distance))
    } else {
        None
    }
}
