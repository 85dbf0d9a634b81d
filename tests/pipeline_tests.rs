use neo_scope::catalog::extract;
use neo_scope::feed::NeoFeed;
use neo_scope::scene::{build_scene, CAMERA_FRAME_COUNT};
use rand::rngs::StdRng;
use rand::SeedableRng;

const FEED_FIXTURE: &str = include_str!("data/feed.json");

fn fixture_feed() -> NeoFeed {
    serde_json::from_str(FEED_FIXTURE).expect("fixture should deserialize")
}

#[test]
fn fixture_deserializes_with_string_valued_measurements() {
    let feed = fixture_feed();
    assert_eq!(feed.entry_count(), 5);

    let records = extract(&feed);
    let ro6 = records
        .iter()
        .find(|r| r.name == "(2020 RO6)")
        .expect("entry with close approach data should survive extraction");
    assert!((ro6.relative_velocity_km_s - 14.3028023313).abs() < 1e-9);
    assert!((ro6.miss_distance_km - 4201544.264913095).abs() < 1e-6);
}

#[test]
fn entry_without_close_approach_is_dropped_not_fatal() {
    let records = extract(&fixture_feed());
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r.name != "(2019 UO9)"));
}

#[test]
fn records_come_out_sorted_by_miss_distance() {
    let records = extract(&fixture_feed());
    for pair in records.windows(2) {
        assert!(pair[0].miss_distance_km <= pair[1].miss_distance_km);
    }
    assert_eq!(records[0].name, "(2020 RO6)");
    assert_eq!(records[3].name, "465633 (2009 JR5)");
}

#[test]
fn hazard_flag_survives_the_full_pipeline() {
    let records = extract(&fixture_feed());
    let mut rng = StdRng::seed_from_u64(42);
    let scene = build_scene(&records, 1.0, &mut rng);

    let hazardous: Vec<_> = scene
        .points
        .iter()
        .filter(|p| p.marker_color == "#FF4B4B")
        .collect();
    assert_eq!(hazardous.len(), 1);
    assert_eq!(hazardous[0].label, "465633 (2009 JR5)");
}

#[test]
fn scene_carries_one_point_per_record_plus_earth() {
    let records = extract(&fixture_feed());
    let mut rng = StdRng::seed_from_u64(42);
    let scene = build_scene(&records, 1.0, &mut rng);

    assert_eq!(scene.points.len(), records.len() + 1);
    let earth = scene.points.last().unwrap();
    assert_eq!(earth.label, "Earth");
    assert_eq!((earth.x, earth.y, earth.z), (0.0, 0.0, 0.0));
    assert_eq!(earth.marker_size, 25.0);
}

#[test]
fn marker_sizes_span_the_fixed_range() {
    let records = extract(&fixture_feed());
    let mut rng = StdRng::seed_from_u64(42);
    let scene = build_scene(&records, 1.0, &mut rng);

    let body_points = &scene.points[..records.len()];
    for point in body_points {
        assert!(point.marker_size >= 4.0 && point.marker_size <= 20.0);
    }

    // Largest mean diameter in the fixture belongs to 465633 (2009 JR5).
    let largest = body_points
        .iter()
        .find(|p| p.label == "465633 (2009 JR5)")
        .unwrap();
    assert_eq!(largest.marker_size, 20.0);
    let smallest = body_points.iter().find(|p| p.label == "(2020 RO6)").unwrap();
    assert_eq!(smallest.marker_size, 4.0);
}

#[test]
fn camera_loop_has_a_full_revolution_of_frames() {
    let records = extract(&fixture_feed());
    let mut rng = StdRng::seed_from_u64(42);
    let scene = build_scene(&records, 1.0, &mut rng);

    assert_eq!(scene.camera_frames.len(), CAMERA_FRAME_COUNT);
    let first = &scene.camera_frames[0].eye;
    assert_eq!((first.x, first.y, first.z), (2.0, 0.0, 0.3));
}

#[test]
fn same_seed_reproduces_the_same_layout() {
    let records = extract(&fixture_feed());

    let mut rng_a = StdRng::seed_from_u64(7);
    let mut rng_b = StdRng::seed_from_u64(7);
    let scene_a = build_scene(&records, 1.5, &mut rng_a);
    let scene_b = build_scene(&records, 1.5, &mut rng_b);

    for (a, b) in scene_a.points.iter().zip(&scene_b.points) {
        assert_eq!(a.label, b.label);
        assert_eq!((a.x, a.y, a.z), (b.x, b.y, b.z));
    }
}
