use glam::DVec2;
use trajectory_path_editor::core::sampler::sample_trajectory;
use trajectory_path_editor::core::{apply_drag, regular_polygon_path, ContinuityMode};
use trajectory_path_editor::table::{
    parse_path_table, path_table_to_string, read_trajectory, write_path_table,
};
use trajectory_path_editor::{
    CsvTrajectoryWriter, PathModel, SamplerConfig, Segment, TableError, TrajectorySink,
    ViewWindow,
};

/// Offener Pfad mit drei Segmenten unterschiedlicher Krümmung.
fn open_three_segments() -> PathModel {
    PathModel::from_segments(&[
        Segment::new(
            DVec2::new(0.0, 0.0),
            DVec2::new(0.3, 0.9),
            DVec2::new(1.1, 1.2),
            DVec2::new(1.7, 0.8),
        ),
        Segment::new(
            DVec2::new(1.7, 0.8),
            DVec2::new(2.3, 0.4),
            DVec2::new(2.6, -0.7),
            DVec2::new(3.4, -0.5),
        ),
        Segment::new(
            DVec2::new(3.4, -0.5),
            DVec2::new(4.2, -0.3),
            DVec2::new(5.0, 0.1),
            DVec2::new(5.2, 1.3),
        ),
    ])
}

#[test]
fn test_save_load_roundtrip_is_bit_exact_after_edits() {
    let mut path = regular_polygon_path(&ViewWindow::default(), 5).unwrap();
    apply_drag(&mut path, 1, DVec2::new(10.123456789, 7.000000001), ContinuityMode::Free);
    apply_drag(&mut path, 7, DVec2::new(2.0 / 3.0, 9.1), ContinuityMode::Free);

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("pfad.csv");
    write_path_table(&path, &file).unwrap();

    let loaded = parse_path_table(&std::fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(loaded.to_flat_points(), path.to_flat_points());
    assert!(loaded.is_closed());
}

#[test]
fn test_saved_table_has_one_row_per_control_point() {
    let path = open_three_segments();
    let content = path_table_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), path.vertex_count());
    assert!(content.lines().all(|line| line.split(',').count() == 2));
}

#[test]
fn test_export_roundtrip_through_csv_sink() {
    let path = open_three_segments();
    let trajectory = sample_trajectory(&path, &SamplerConfig::default()).unwrap();
    let header = trajectory.header(12);

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("ttl.csv");
    let mut sink = CsvTrajectoryWriter::create(&file).unwrap();
    sink.consume(&header, &trajectory.records).unwrap();
    drop(sink);

    let (read_header, records) = read_trajectory(std::fs::File::open(&file).unwrap()).unwrap();
    assert_eq!(read_header, header);
    assert_eq!(records, trajectory.records);

    let first_line = std::fs::read_to_string(&file)
        .unwrap()
        .lines()
        .next()
        .map(str::to_owned)
        .unwrap();
    assert!(first_line.starts_with("12,"));
}

#[test]
fn test_export_spacing_is_even_across_segments() {
    let path = open_three_segments();
    let config = SamplerConfig::default();
    let trajectory = sample_trajectory(&path, &config).unwrap();

    for pair in trajectory.records.windows(2) {
        let spacing = pair[0].corridor_limit_a.distance(pair[1].corridor_limit_a);
        assert!(
            (spacing - config.step).abs() < 0.01 * config.step,
            "Abstand {spacing} weicht zu stark von {} ab",
            config.step
        );
    }
    assert!((trajectory.total_length - trajectory.header(0).initial_forward_distance).abs() < 1e-15);
}

#[test]
fn test_truncated_export_is_rejected_on_read() {
    let content = "1,3,0.06\n0,0.02,0,0,0,0,0,0\n0,0.02,0.02,0.02,0,0.02,0,0\n";
    let result = read_trajectory(content.as_bytes());
    assert!(matches!(
        result,
        Err(TableError::RecordCountMismatch {
            expected: 3,
            found: 2
        })
    ));
}
