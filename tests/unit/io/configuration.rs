//! Tests for consistency between fixed sketch constants

#[cfg(test)]
mod tests {
    use dotsketch::io::configuration::{
        DEFAULT_CANVAS_SIZE, DEFAULT_SENSITIVITY, GRID_RESOLUTION, MAX_LOW_SENSITIVITY_SEGMENTS,
        MAX_SENSITIVITY, MID_THRESHOLD, SUPPORTED_EXTENSIONS,
    };

    // Tests thresholds lie inside the sensitivity range
    // Verified by raising the mid-threshold above the maximum
    #[test]
    fn test_thresholds_within_range() {
        assert!(MID_THRESHOLD < MAX_SENSITIVITY);
        assert!(DEFAULT_SENSITIVITY <= MAX_SENSITIVITY);
    }

    // Tests grid geometry constants
    // Verified by changing the resolution
    #[test]
    fn test_grid_geometry() {
        assert_eq!(GRID_RESOLUTION, 9);
        assert_eq!(MAX_LOW_SENSITIVITY_SEGMENTS, 2);
        assert!(DEFAULT_CANVAS_SIZE as usize >= GRID_RESOLUTION);
    }

    // Tests PNG input is always accepted
    // Verified by removing png from the list
    #[test]
    fn test_png_supported() {
        assert!(SUPPORTED_EXTENSIONS.contains(&"png"));
        assert!(SUPPORTED_EXTENSIONS.iter().all(|ext| ext.chars().all(|c| c.is_ascii_lowercase())));
    }
}
