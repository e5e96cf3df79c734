
extern crate fillpoly;

use fillpoly::{artwork, edge_parameter, to_screen, Error, FillConfig, FillRule, Point, Polygon, PolygonDefect, Scanline, ScanlineFill, Span};

fn pts(v: &[(f64,f64)]) -> Vec<Point> {
    v.iter().map(|&p| Point::from(p)).collect()
}

fn square() -> Vec<Point> {
    pts(&[(0.,0.), (2.,0.), (2.,2.), (0.,2.), (0.,0.)])
}

/// Concave chevron; the reflex vertex (20,10) dips into the top edge
fn arrow() -> Vec<Point> {
    pts(&[(0.,0.), (20.,10.), (40.,0.), (40.,30.), (0.,30.), (0.,0.)])
}

fn loaded(points: &[Point]) -> ScanlineFill {
    let mut fill = ScanlineFill::new();
    fill.reset(points).unwrap();
    fill
}

fn crossing_count(fill: &ScanlineFill, y: f64) -> usize {
    let mut out = vec![];
    fill.crossings(y, &mut out);
    out.len()
}

#[test]
fn square_middle_scanline_one_span() {
    let fill = loaded(&square());
    let mut sl = Scanline::new();
    fill.spans_at(1.0, &mut sl);
    assert_eq!(sl.spans, vec![Span { x0: 0.0, x1: 2.0, y: 1.0 }]);
    // The left edge meets at x = -0.0; spans carry +0.0
    assert_eq!(sl.spans[0].x0.to_bits(), 0.0_f64.to_bits());
}

#[test]
fn square_top_scanline_counts_shared_vertex_once() {
    let fill = loaded(&square());
    let mut out = vec![];
    fill.crossings(0.0, &mut out);
    assert_eq!(out.len(), 1);
    // Left edge runs (0,2) -> (0,0) and ends on the scanline
    assert_eq!(out[0].edge, 3);
    assert_eq!(out[0].lambda, 1.0);
    assert_eq!(out[0].point, Point::new(0.0, 0.0));

    let mut sl = Scanline::new();
    fill.spans_at(0.0, &mut sl);
    assert!(sl.spans.is_empty());

    assert_eq!(crossing_count(&fill, 2.0), 1);
}

#[test]
fn concave_arrow_pairs_even_odd() {
    let fill = loaded(&arrow());
    let mut sl = Scanline::new();
    fill.spans_at(5.0, &mut sl);
    let xs : Vec<f64> = sl.crossings.iter().map(|c| c.point.x).collect();
    assert_eq!(xs, vec![0.0, 10.0, 30.0, 40.0]);
    assert_eq!(sl.spans, vec![Span { x0: 0.0, x1: 10.0, y: 5.0 },
                              Span { x0: 30.0, x1: 40.0, y: 5.0 }]);
    // Nothing may be drawn across the notch
    assert!(sl.spans.iter().all(|s| !(s.x0 < 20.0 && s.x1 > 20.0)));

    // Below the reflex vertex the scanline is a single span again
    fill.spans_at(20.0, &mut sl);
    assert_eq!(sl.spans, vec![Span { x0: 0.0, x1: 40.0, y: 20.0 }]);
}

#[test]
fn scanline_touching_reflex_vertex_keeps_full_span() {
    let fill = loaded(&arrow());
    let mut sl = Scanline::new();
    fill.spans_at(10.0, &mut sl);
    // (20,10) only touches the scanline; both its edges lie above it
    let xs : Vec<f64> = sl.crossings.iter().map(|c| c.point.x).collect();
    assert_eq!(xs, vec![0.0, 40.0]);
    assert_eq!(sl.spans, vec![Span { x0: 0.0, x1: 40.0, y: 10.0 }]);
    let covered : f64 = sl.spans.iter().map(|s| s.len()).sum();
    assert_eq!(covered, 40.0);
    assert!(sl.crossings.iter().all(|c| c.point.x.to_bits() != (-0.0_f64).to_bits()));

    // Same under the non-zero rule
    let mut fill = fill;
    fill.filling_rule(FillRule::NonZero);
    fill.spans_at(10.0, &mut sl);
    assert_eq!(sl.spans, vec![Span { x0: 0.0, x1: 40.0, y: 10.0 }]);
}

#[test]
fn vertical_edges_measure_lambda_along_y() {
    // Exactly vertical: v.x == 0
    let l = edge_parameter(Point::new(10.0, 0.0), Point::new(10.0, 20.0),
                           Point::new(10.000_000_1, 5.0), 0.01);
    assert_eq!(l, 0.25);

    // Nearly vertical: |v.x| below epsilon, meet slightly off in x.
    // Measured along x this would be 0.4.
    let l = edge_parameter(Point::new(10.0, 0.0), Point::new(10.005, 20.0),
                           Point::new(10.002, 5.0), 0.01);
    assert_eq!(l, 0.25);

    let fill = loaded(&pts(&[(0.,0.), (10.,0.), (10.005,20.), (0.,20.), (0.,0.)]));
    let mut sl = Scanline::new();
    for y in 1..20 {
        fill.spans_at(y as f64, &mut sl);
        assert_eq!(sl.spans.len(), 1, "y {}", y);
        let s = sl.spans[0];
        assert!(s.x0.is_finite() && s.x1.is_finite());
        assert_eq!(s.x0, 0.0);
        assert!(s.x1 >= 10.0 && s.x1 <= 10.005);
    }
}

#[test]
fn convex_polygon_scanlines_cross_evenly() {
    let (cx, cy, r) = (100.0_f64, 100.0_f64, 40.0_f64);
    let mut hex : Vec<Point> = (0..6)
        .map(|i| {
            let a = 0.3 + i as f64 * std::f64::consts::PI / 3.0;
            Point::new(cx + r * a.cos(), cy + r * a.sin())
        })
        .collect();
    hex.push(hex[0]);
    let fill = loaded(&hex);
    let (top, bot) = fill.extent().unwrap();

    assert!(crossing_count(&fill, top.y) <= 2);
    let mut y = top.y + 1.0;
    while y < bot.y {
        let n = crossing_count(&fill, y);
        assert!(n >= 2 && n % 2 == 0, "y {} has {} crossings", y, n);
        y += 1.0;
    }
}

#[test]
fn triangle_extremes() {
    let fill = loaded(&pts(&[(10.,10.), (50.,90.), (90.,10.), (10.,10.)]));
    // Top edge lies on the scanline: one side vertex counts once
    assert_eq!(crossing_count(&fill, 10.0), 1);
    // Apex is only touched
    assert_eq!(crossing_count(&fill, 90.0), 0);
    for y in 11..90 {
        assert_eq!(crossing_count(&fill, y as f64), 2);
    }
}

#[test]
fn artwork_crosses_evenly_between_extremes() {
    let model = Polygon::new(artwork()).unwrap();
    let screen = to_screen(&model, Point::new(200.0, 0.0), 122.0).unwrap();
    let fill = loaded(screen.points());
    let (top, bot) = fill.extent().unwrap();
    assert_eq!((top.y, bot.y), (0.0, 610.0));

    let mut y = top.y + 1.0;
    while y < bot.y {
        let n = crossing_count(&fill, y);
        assert!(n >= 2 && n % 2 == 0, "y {} has {} crossings", y, n);
        y += 1.0;
    }
}

#[test]
fn spans_are_idempotent() {
    let model = Polygon::new(artwork()).unwrap();
    let screen = to_screen(&model, Point::new(137.5, 21.25), 97.0).unwrap();
    let mut fill = ScanlineFill::with_capacity(screen.len());
    fill.reset_polygon(&screen);
    let first = fill.spans();
    let second = fill.spans();
    assert!(!first.is_empty());
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.x0.to_bits(), b.x0.to_bits());
        assert_eq!(a.x1.to_bits(), b.x1.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
    }

    fill.reset_polygon(&screen);
    assert_eq!(fill.spans(), first);
}

#[test]
fn sweep_visits_only_scanlines_with_spans() {
    let mut fill = loaded(&square());
    let mut sl = Scanline::new();
    assert!(fill.rewind_scanlines());
    assert!(fill.sweep_scanline(&mut sl));
    assert_eq!(sl.y, 1.0);
    assert!(!fill.sweep_scanline(&mut sl));

    assert!(fill.rewind_scanlines());
    assert!(fill.sweep_scanline(&mut sl));
    assert_eq!(sl.y, 1.0);
}

#[test]
fn non_zero_fills_doubly_wound_region() {
    // The same square traversed twice
    let twice = pts(&[(0.,0.), (10.,0.), (10.,10.), (0.,10.),
                      (0.,0.), (10.,0.), (10.,10.), (0.,10.), (0.,0.)]);
    let mut fill = loaded(&twice);
    let mut sl = Scanline::new();

    fill.spans_at(5.0, &mut sl);
    assert_eq!(sl.crossings.len(), 4);
    assert!(sl.spans.iter().all(|s| s.is_empty()));

    fill.filling_rule(FillRule::NonZero);
    fill.spans_at(5.0, &mut sl);
    assert_eq!(sl.spans, vec![Span { x0: 0.0, x1: 10.0, y: 5.0 }]);
}

#[test]
fn reset_overwrites_previous_polygon() {
    let mut fill = ScanlineFill::with_capacity(8);
    fill.reset(&arrow()).unwrap();
    assert_eq!(fill.edges().len(), 5);
    fill.reset(&square()).unwrap();
    assert_eq!(fill.edges().len(), 4);
    assert_eq!(fill.vertices(), &square()[..]);
    assert!(fill.reset(&square()[..3]).is_err());
    assert!(fill.extent().is_none());
}

#[test]
fn reset_rejects_non_finite_points() {
    let mut fill = ScanlineFill::new();
    let bad = pts(&[(0.,0.), (1.,std::f64::INFINITY), (2.,0.), (0.,0.)]);
    match fill.reset(&bad) {
        Err(Error::InvalidPolygon(PolygonDefect::NonFinite(1))) => {},
        other => panic!("expected non finite point, got {:?}", other),
    }
    let mut sl = Scanline::new();
    assert!(!fill.rewind_scanlines());
    assert!(!fill.sweep_scanline(&mut sl));
}

#[test]
fn configured_engine_fills_non_zero() {
    let cfg = FillConfig { rule: FillRule::NonZero, ..FillConfig::default() };
    let mut fill = ScanlineFill::with_config(&cfg, 16);
    let twice = pts(&[(0.,0.), (10.,0.), (10.,10.), (0.,10.),
                      (0.,0.), (10.,0.), (10.,10.), (0.,10.), (0.,0.)]);
    fill.reset(&twice).unwrap();
    let spans = fill.spans();
    assert_eq!(spans.len(), 9);
    assert!(spans.iter().all(|s| (s.x0, s.x1) == (0.0, 10.0)));
}
