//! Tests for source decoding and sketch export

#[cfg(test)]
mod tests {
    use dotsketch::SketchError;
    use dotsketch::analysis::edges::{EdgeMethod, GridPoint};
    use dotsketch::io::image::{export_commands_json, export_sketch_png, load_source_image};
    use dotsketch::pipeline::controller::{PipelineVariant, RenderSet, Sensitivity};
    use dotsketch::render::raster::RasterSurface;
    use dotsketch::render::sketch::{Strokes, render_sketch};
    use dotsketch::render::surface::Color;
    use image::{Rgba, RgbaImage};

    // Tests PNG export writes a decodable file with canvas dimensions
    // Verified by disabling file save operation
    #[test]
    fn test_export_sketch_png_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("nested/out.png");
        let mut surface = RasterSurface::new(90, 90, Some(Color::WHITE)).unwrap();
        render_sketch(&mut surface, &Strokes::Segments(Vec::new()));

        export_sketch_png(&surface, &output_path).unwrap();

        let loaded = load_source_image(&output_path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (90, 90));
        assert_eq!(loaded.get_pixel(5, 5), &Rgba([0, 0, 0, 255]));
    }

    // Tests missing files surface as ImageLoad errors
    // Verified by mapping to a file system error
    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let result = load_source_image(&dir.path().join("absent.png"));

        assert!(matches!(result, Err(SketchError::ImageLoad { .. })));
    }

    // Tests decoding a saved RGBA image preserves its pixels
    // Verified by converting to grayscale on load
    #[test]
    fn test_load_source_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("source.png");
        RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let loaded = load_source_image(&path).unwrap();

        assert_eq!((loaded.width(), loaded.height()), (4, 3));
        assert_eq!(loaded.to_rgba8().get_pixel(1, 1), &Rgba([10, 20, 30, 255]));
    }

    // Tests JSON export carries the render set and replayed commands
    // Verified by omitting commands from the export
    #[test]
    fn test_export_commands_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sketch.json");
        let edges = vec![GridPoint::new(4, 0), GridPoint::new(4, 1)];
        let render_set = RenderSet {
            sensitivity: Sensitivity::new(30).unwrap(),
            method: EdgeMethod::Simple,
            edges: edges.clone(),
            strokes: Strokes::Path(edges),
        };

        export_commands_json(&render_set, PipelineVariant::Direct, (450.0, 450.0), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["variant"], "direct");
        assert_eq!(value["sensitivity"], 30);
        assert_eq!(value["method"], "simple");
        assert_eq!(value["edges"][1]["y"], 1);
        assert_eq!(value["strokes"]["kind"], "path");
        // Clear, 81 dots, move, line, stroke
        assert_eq!(value["commands"].as_array().map(Vec::len), Some(85));
    }
}
