//! Tests for RGBA to intensity grid reduction and buffer validation

#[cfg(test)]
mod tests {
    use dotsketch::SketchError;
    use dotsketch::analysis::grayscale::IntensityGrid;
    use dotsketch::io::configuration::GRID_RESOLUTION;

    fn grid_bytes(rgba: [u8; 4]) -> Vec<u8> {
        rgba.repeat(GRID_RESOLUTION * GRID_RESOLUTION)
    }

    // Tests all-white buffer reduces to 255 in every cell
    // Verified by dividing by 4 instead of 3
    #[test]
    fn test_white_buffer_is_full_intensity() {
        let grid = IntensityGrid::from_rgba(&grid_bytes([255, 255, 255, 255]), GRID_RESOLUTION)
            .unwrap();

        assert_eq!(grid.resolution(), GRID_RESOLUTION);
        assert_eq!(grid.values().count(), GRID_RESOLUTION * GRID_RESOLUTION);
        assert!(grid.values().all(|v| (v - 255.0).abs() < f64::EPSILON));
    }

    // Tests alpha channel does not contribute to intensity
    // Verified by averaging all four channels
    #[test]
    fn test_alpha_is_ignored() {
        let opaque = IntensityGrid::from_rgba(&grid_bytes([30, 60, 90, 255]), 9).unwrap();
        let clear = IntensityGrid::from_rgba(&grid_bytes([30, 60, 90, 0]), 9).unwrap();

        assert_eq!(opaque, clear);
        assert!(opaque.get(4, 4).is_some_and(|v| (v - 60.0).abs() < 1e-9));
    }

    // Tests pixels map to cells in row-major order
    // Verified by transposing the array shape
    #[test]
    fn test_row_major_indexing() {
        let mut bytes = grid_bytes([0, 0, 0, 255]);
        // Pixel index for column 2, row 5
        let index = (5 * GRID_RESOLUTION + 2) * 4;
        for channel in bytes.iter_mut().skip(index).take(3) {
            *channel = 90;
        }

        let grid = IntensityGrid::from_rgba(&bytes, GRID_RESOLUTION).unwrap();

        assert!(grid.get(2, 5).is_some_and(|v| (v - 90.0).abs() < 1e-9));
        assert!(grid.get(5, 2).is_some_and(|v| v.abs() < 1e-9));
    }

    // Tests out-of-range lookups return None
    // Verified by clamping coordinates
    #[test]
    fn test_out_of_bounds_lookup() {
        let grid = IntensityGrid::from_rgba(&grid_bytes([1, 2, 3, 4]), 9).unwrap();

        assert!(grid.get(9, 0).is_none());
        assert!(grid.get(0, 9).is_none());
        assert!(grid.get(8, 8).is_some());
    }

    // Tests buffer length not divisible by 4 is rejected
    // Verified by removing the channel-multiple check
    #[test]
    fn test_partial_pixel_rejected() {
        let mut bytes = grid_bytes([10, 10, 10, 255]);
        bytes.pop();

        let result = IntensityGrid::from_rgba(&bytes, GRID_RESOLUTION);

        assert!(matches!(result, Err(SketchError::InvalidInput { .. })));
    }

    // Tests whole-pixel buffer of the wrong size is rejected
    // Verified by removing the length equality check
    #[test]
    fn test_wrong_pixel_count_rejected() {
        let bytes = [0u8, 0, 0, 255].repeat(8 * 8);

        let result = IntensityGrid::from_rgba(&bytes, GRID_RESOLUTION);

        match result {
            Err(SketchError::InvalidInput { reason }) => {
                assert!(reason.contains("9x9"), "unexpected reason: {reason}");
            }
            other => unreachable!("Expected InvalidInput, got {other:?}"),
        }
    }
}
