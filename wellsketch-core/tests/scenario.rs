use wellsketch_core::{
    Composer, ComposerOptions, ConfigProvider, ElementConfig, Margins, RecordingSurface, ShapeKind,
    StaticProvider, DEFAULT_BASELINE_MD,
};

const EPS: f64 = 1e-9;

fn composer() -> Composer {
    Composer::new(ComposerOptions { margins: Margins::uniform(20.0), ..ComposerOptions::default() })
}

fn production_casing() -> ElementConfig {
    ElementConfig::casing(17.5, 1900.0, 13.375, 213.0, 1900.0).with_toc(213.0)
}

#[test]
fn production_casing_scenario() {
    // 400x800 content area inside 20px margins
    let scene = composer().compose(&[production_casing()], 440.0, 840.0).expect("compose");

    assert_eq!(scene.ranges.max_hole_size, 17.5);
    assert_eq!(scene.ranges.max_md, 1900.0);
    assert_eq!(scene.ranges.prev_md, DEFAULT_BASELINE_MD);
    assert_eq!(scene.ranges.min_md, scene.ranges.prev_md);

    let v = scene.scales.vertical;
    let hole = scene.path(ShapeKind::Hole).expect("hole");
    let cement = scene.path(ShapeKind::Cement).expect("cement");
    let fill = scene.path(ShapeKind::CasingFill).expect("casing fill");
    let left = scene.path(ShapeKind::CasingLeftIncision).expect("left incision");
    let right = scene.path(ShapeKind::CasingRightIncision).expect("right incision");

    assert!((hole.points[0].y - v.map(DEFAULT_BASELINE_MD)).abs() < EPS);
    assert!((cement.points[0].y - v.map(213.0)).abs() < EPS);
    assert!((fill.points[0].y - v.map(213.0)).abs() < EPS);
    assert!((fill.points[1].y - v.map(1900.0)).abs() < EPS);

    let midline = (hole.points[0].x + hole.points[2].x) / 2.0;
    assert!((midline - 200.0).abs() < EPS);
    assert_eq!(left.points.len(), 5);
    for (l, r) in left.points.iter().zip(&right.points) {
        assert!((l.x + r.x - 2.0 * midline).abs() < 1e-6);
        assert_eq!(l.y, r.y);
    }
}

#[test]
fn render_is_idempotent() {
    let composer = composer();
    let provider = StaticProvider::single(production_casing());
    let mut surface = RecordingSurface::new(440.0, 840.0);

    let first = composer.render(&mut surface, &provider).expect("first render");
    let drawn_once = surface.paths.clone();
    let second = composer.render(&mut surface, &provider).expect("second render");

    assert_eq!(first, second);
    assert_eq!(drawn_once, surface.paths);
    assert_eq!(surface.gradients.len(), 1);
}

#[test]
fn surface_paths_are_offset_by_margins() {
    let composer = Composer::default();
    let provider = StaticProvider::sample();
    let mut surface = RecordingSurface::new(400.0, 800.0);
    let scene = composer.render(&mut surface, &provider).expect("render");

    let local = scene.path(ShapeKind::Hole).expect("hole");
    let drawn = &surface.paths[0];
    assert_eq!(drawn.points[0].x, local.points[0].x + 50.0);
    assert_eq!(drawn.points[0].y, local.points[0].y + 20.0);
}

#[test]
fn scene_serializes_to_json() {
    let scene = Composer::default()
        .compose(&StaticProvider::sample().elements(), 400.0, 800.0)
        .expect("compose");
    let json = serde_json::to_string(&scene).expect("serialize");
    assert!(json.contains("\"op\":\"clear\""));
    assert!(json.contains("casing_left_incision"));
}
