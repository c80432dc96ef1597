//! Node display sizing

/// Growth factor applied to the square root of the neighbor count
pub const SIZE_SCALE: f64 = 2.5;

/// Display size for a node with the given neighbor count.
///
/// `base_size + sqrt(neighbor_count) * 2.5` for a positive count, otherwise
/// `base_size`. A missing count also yields `base_size`.
pub fn node_display_size(neighbor_count: Option<u64>, base_size: f64) -> f64 {
    match neighbor_count {
        Some(n) if n > 0 => base_size + (n as f64).sqrt() * SIZE_SCALE,
        _ => base_size,
    }
}
