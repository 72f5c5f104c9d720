use approx::assert_abs_diff_eq;
use nalgebra::Point2;
use std::f64::consts::PI;
use unistroke::core::{path_length, rotate};
use unistroke::{
    best_distance, normalize, resample, NormalizeParams, NormalizedStroke, RecognizeError,
    Recognizer, RecognizerParams, RotationMode, SearchParams, TemplateStore,
};

fn circle(cx: f64, cy: f64, r: f64, n: usize, start: f64) -> Vec<Point2<f64>> {
    (0..n)
        .map(|i| {
            let t = start + 2.0 * PI * i as f64 / (n - 1) as f64;
            Point2::new(cx + r * t.cos(), cy + r * t.sin())
        })
        .collect()
}

fn polyline(vertices: &[Point2<f64>], per_segment: usize) -> Vec<Point2<f64>> {
    let mut out = Vec::new();
    for w in vertices.windows(2) {
        for k in 0..per_segment {
            let t = k as f64 / per_segment as f64;
            out.push(w[0] + (w[1] - w[0]) * t);
        }
    }
    out.extend(vertices.last().copied());
    out
}

fn triangle(per_segment: usize) -> Vec<Point2<f64>> {
    polyline(
        &[
            Point2::new(0.0, -1.0),
            Point2::new(0.866, 0.5),
            Point2::new(-0.866, 0.5),
            Point2::new(0.0, -1.0),
        ],
        per_segment,
    )
}

fn affine(stroke: &[Point2<f64>], s: f64, theta: f64, dx: f64, dy: f64) -> Vec<Point2<f64>> {
    rotate(stroke, theta)
        .into_iter()
        .map(|p| Point2::new(p.x * s + dx, p.y * s + dy))
        .collect()
}

fn normalized(raw: &[Point2<f64>]) -> NormalizedStroke {
    let pts = resample(raw, 32).expect("resample");
    normalize(&pts, &NormalizeParams::default()).expect("normalize")
}

fn circle_and_triangle() -> Recognizer {
    let mut rec = Recognizer::new(RecognizerParams::default()).expect("recognizer");
    rec.add_template("Circle", normalized(&circle(0.0, 0.0, 1.0, 64, 0.0)).points)
        .expect("circle");
    rec.add_template("Triangle", normalized(&triangle(10)).points)
        .expect("triangle");
    rec
}

fn feed(rec: &mut Recognizer, stroke: &[Point2<f64>]) {
    for p in stroke {
        rec.add_point(p.x, p.y);
    }
}

#[test]
fn circle_stroke_matches_circle_template() {
    let mut rec = circle_and_triangle();
    for (cx, cy, r, n, start) in [
        (300.0, 200.0, 75.0, 40, 1.0),
        (-5.0, 7.0, 3.0, 25, 2.5),
        (0.0, 0.0, 1000.0, 120, -0.7),
    ] {
        feed(&mut rec, &circle(cx, cy, r, n, start));
        let result = rec.classify().expect("classify");
        assert_eq!(result.name, "Circle");
        assert!(result.score > 0.6, "score {}", result.score);
    }
}

#[test]
fn triangle_stroke_matches_triangle_template() {
    let mut rec = circle_and_triangle();
    for (s, theta, dx, dy, per) in [(50.0, 0.7, 100.0, 100.0, 7), (3.0, 0.0, -10.0, 4.0, 5)] {
        feed(&mut rec, &affine(&triangle(per), s, theta, dx, dy));
        let result = rec.classify().expect("classify");
        assert_eq!(result.name, "Triangle");
        assert!(result.score > 0.6, "score {}", result.score);
    }
}

#[test]
fn classify_is_scale_and_translation_invariant() {
    let rec = circle_and_triangle();
    let stroke = circle(10.0, 10.0, 5.0, 40, 0.3);
    let moved = affine(&stroke, 7.0, 0.0, 100.0, -50.0);

    let a = rec.classify_stroke(&stroke).expect("classify");
    let b = rec.classify_stroke(&moved).expect("classify");
    assert_eq!(a.name, b.name);
    assert_abs_diff_eq!(a.score, b.score, epsilon = 1e-9);
}

#[test]
fn best_distance_is_rotation_invariant_inside_window() {
    let params = SearchParams {
        threshold: 1e-3,
        ..SearchParams::default()
    };
    let s = normalized(&triangle(10));
    let t = normalized(&circle(0.0, 0.0, 1.0, 64, 0.0));
    for alpha in [-0.3, 0.2, 0.35] {
        let rotated = NormalizedStroke::from_normalized(rotate(&s.points, alpha));
        for tmpl in [&s, &t] {
            let base = best_distance(&s, tmpl, &params).expect("base");
            let turned = best_distance(&rotated, tmpl, &params).expect("rotated");
            assert_abs_diff_eq!(base, turned, epsilon = 1e-2);
        }
    }
}

#[test]
fn resample_keeps_count_and_length_on_straight_segments() {
    let stroke: Vec<Point2<f64>> = [0.0, 0.3, 2.0, 2.2, 5.9, 8.0]
        .iter()
        .map(|&t| Point2::new(3.0 * t + 1.0, -4.0 * t))
        .collect();
    for n in [2, 5, 32, 100] {
        let out = resample(&stroke, n).expect("resample");
        assert_eq!(out.len(), n);
        assert_abs_diff_eq!(path_length(&out), path_length(&stroke), epsilon = 1e-9);
    }
}

#[test]
fn normalize_is_idempotent() {
    let once = normalized(&affine(&triangle(9), 12.0, 1.1, 4.0, -8.0));
    let twice = normalize(&once.points, &NormalizeParams::default()).expect("normalize");
    for (a, b) in once.points.iter().zip(&twice.points) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
    }
}

#[test]
fn empty_store_reports_no_templates() {
    let mut rec = Recognizer::new(RecognizerParams::default()).expect("recognizer");
    feed(&mut rec, &circle(0.0, 0.0, 4.0, 30, 0.0));
    assert_eq!(rec.classify(), Err(RecognizeError::NoTemplates));
}

#[test]
fn wrong_length_template_is_rejected() {
    let mut store = TemplateStore::new(32);
    let short = vec![Point2::new(0.0, 0.0); 20];
    assert_eq!(
        store.add_template("x", short),
        Err(RecognizeError::TemplateSizeMismatch {
            expected: 32,
            got: 20
        })
    );
}

#[test]
fn straight_line_serialize_is_degenerate() {
    let mut rec = circle_and_triangle();
    for i in 0..25 {
        rec.add_point(10.0 + i as f64 * 4.0, 30.0 + i as f64 * 1.5);
    }
    match rec.serialize() {
        Err(RecognizeError::DegenerateStroke { .. }) => {}
        other => panic!("expected DegenerateStroke, got {other:?}"),
    }
}

#[test]
fn builtin_shapes_recognize_their_own_drawings() {
    let rec = Recognizer::with_builtins(RecognizerParams::default()).expect("builtins");

    let star: Vec<Point2<f64>> = (0..6)
        .map(|k| {
            let a = PI / 2.0 + k as f64 * 4.0 * PI / 5.0;
            Point2::new(a.cos(), -a.sin())
        })
        .collect();
    let zig_zag = [
        Point2::new(-1.0, -0.5),
        Point2::new(-0.5, 0.5),
        Point2::new(0.0, -0.5),
        Point2::new(0.5, 0.5),
        Point2::new(1.0, -0.5),
    ];
    let rectangle = [
        Point2::new(-1.0, -0.6),
        Point2::new(-1.0, 0.6),
        Point2::new(1.0, 0.6),
        Point2::new(1.0, -0.6),
        Point2::new(-1.0, -0.6),
    ];

    for (name, raw) in [
        ("star", polyline(&star, 9)),
        ("zig_zag", polyline(&zig_zag, 6)),
        ("rectangle", polyline(&rectangle, 8)),
    ] {
        let drawn = affine(&raw, 40.0, 0.0, 200.0, 100.0);
        let result = rec.classify_stroke(&drawn).expect("classify");
        assert_eq!(result.name, name);
        assert!(result.score > 0.8, "{name}: score {}", result.score);
    }
}

#[test]
fn builtins_refuse_params_they_were_not_normalized_with() {
    let mut small = RecognizerParams::default();
    small.normalize.reference_size = 0.5;
    let mut preserve = RecognizerParams::default();
    preserve.normalize.rotation = RotationMode::Preserve;

    for params in [small, preserve] {
        assert!(matches!(
            Recognizer::with_builtins(params),
            Err(RecognizeError::IncompatibleBuiltins { .. })
        ));
    }

    let nan_window = RecognizerParams {
        search: SearchParams {
            angle_range: f64::NAN,
            ..SearchParams::default()
        },
        ..RecognizerParams::default()
    };
    assert!(matches!(
        Recognizer::with_builtins(nan_window),
        Err(RecognizeError::InvalidSearchParams { .. })
    ));
}

#[test]
fn custom_reference_size_still_works_without_builtins() {
    let mut params = RecognizerParams::default();
    params.normalize.reference_size = 4.0;
    let mut rec = Recognizer::new(params).expect("recognizer");
    feed(&mut rec, &circle(0.0, 0.0, 1.0, 64, 0.0));
    let circle_template = rec.serialize().expect("serialize");
    rec.add_normalized("Circle", circle_template).expect("add");

    feed(&mut rec, &circle(40.0, -3.0, 9.0, 40, 1.2));
    let result = rec.classify().expect("classify");
    assert_eq!(result.name, "Circle");
    assert!(result.score > 0.9, "score {}", result.score);
}
