//! Tests for scan-order segmentation and low-sensitivity pruning

#[cfg(test)]
mod tests {
    use dotsketch::analysis::edges::GridPoint;
    use dotsketch::analysis::segments::{Segment, build_segments, prune_segments, segment_edges};

    fn points(coords: &[(usize, usize)]) -> Vec<GridPoint> {
        coords.iter().map(|&(x, y)| GridPoint::new(x, y)).collect()
    }

    fn five_isolated() -> Vec<GridPoint> {
        points(&[(0, 0), (2, 0), (4, 0), (6, 0), (8, 0)])
    }

    // Tests break is inserted before the point whose column jumps
    // Verified by pushing the jumping point before closing the segment
    #[test]
    fn test_break_before_jump() {
        let segments = build_segments(&points(&[(0, 0), (1, 0), (5, 0)]));

        assert_eq!(
            segments,
            vec![
                Segment::new(points(&[(0, 0), (1, 0)])),
                Segment::new(points(&[(5, 0)])),
            ]
        );
    }

    // Tests column steps of at most one stay in one segment across rows
    // Verified by breaking on any row change
    #[test]
    fn test_adjacent_columns_stay_joined() {
        let edges = points(&[(4, 0), (5, 0), (4, 1), (5, 1), (4, 2)]);

        let segments = build_segments(&edges);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments.first().map(Segment::points), Some(edges.as_slice()));
    }

    // Tests every point appears exactly once and in input order
    // Verified by dropping the final flush
    #[test]
    fn test_partition_preserves_points() {
        let edges = points(&[(0, 0), (1, 0), (7, 0), (8, 0), (0, 1), (3, 3), (4, 3)]);

        let segments = build_segments(&edges);
        let flattened: Vec<GridPoint> = segments
            .iter()
            .flat_map(|s| s.points().iter().copied())
            .collect();

        assert_eq!(flattened, edges);
        assert_eq!(segments.len(), 4);
        assert!(segments.iter().all(|s| !s.is_empty()));
    }

    // Tests empty input produces no segments
    // Verified by always flushing the open segment
    #[test]
    fn test_empty_input() {
        assert!(build_segments(&[]).is_empty());
        assert!(segment_edges(&[], 10).is_empty());
    }

    // Tests low sensitivity keeps only the first two segments
    // Verified by truncating to three
    #[test]
    fn test_low_sensitivity_truncates() {
        let segments = segment_edges(&five_isolated(), 10);

        assert_eq!(segments.len(), 2);
        assert_eq!(
            segments,
            vec![
                Segment::new(points(&[(0, 0)])),
                Segment::new(points(&[(2, 0)])),
            ]
        );
    }

    // Tests mid and high sensitivity keep every segment
    // Verified by using <= for the pruning comparison
    #[test]
    fn test_high_sensitivity_keeps_all() {
        assert_eq!(segment_edges(&five_isolated(), 80).len(), 5);
        assert_eq!(segment_edges(&five_isolated(), 50).len(), 5);
        assert_eq!(segment_edges(&five_isolated(), 49).len(), 2);
    }

    // Tests pruning leaves short lists untouched
    // Verified by padding to the limit
    #[test]
    fn test_prune_short_list() {
        let one = vec![Segment::new(points(&[(1, 1), (2, 1)]))];

        assert_eq!(prune_segments(one.clone(), 0), one);
    }
}
