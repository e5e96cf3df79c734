
extern crate fillpoly;

use std::fs;
use std::path::PathBuf;

use fillpoly::{artwork, img_diff, read_file, render_scanlines};
use fillpoly::{Canvas, Config, DrawCommand, DrawList, DrawTarget, Error, FillConfig, FillRule, Palette, Point, Rgba8, Scene, ScanlineFill, ViewConfig, ViewState};

fn tmp(name: &str) -> PathBuf {
    let dir = PathBuf::from("tests").join("tmp");
    fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

fn unit_square() -> Vec<Point> {
    [(0.,0.), (1.,0.), (1.,1.), (0.,1.), (0.,0.)].iter().map(|&p| Point::from(p)).collect()
}

fn opaque_palette() -> Palette {
    Palette {
        background: Rgba8::black(),
        outline: Rgba8::new(255, 0, 0, 255),
        fill: Rgba8::new(0, 255, 0, 255),
        ..Palette::default()
    }
}

fn square_view(show_scanline: bool) -> ViewState {
    ViewState::new(&ViewConfig {
        origin: Point::new(10.0, 10.0),
        scale: 20.0,
        scanline_y: 20.0,
        show_scanline,
        ..ViewConfig::default()
    })
}

#[test_log::test]
fn scene_draws_in_order() {
    let cfg = Config::default();
    let pal = cfg.colors;
    let mut scene = Scene::new(&cfg);
    let mut ren = DrawList::new(100, 100);
    let stats = scene.render(&unit_square(), &square_view(true), &mut ren).unwrap();

    assert_eq!(ren.commands[0], DrawCommand::Clear(pal.background));
    match &ren.commands[1] {
        DrawCommand::Lines { points, color } => {
            assert_eq!(*color, pal.outline);
            assert_eq!(points.len(), 5);
            assert_eq!(points[0], Point::new(10.0, 10.0));
            assert_eq!(points[2], Point::new(30.0, 30.0));
        },
        other => panic!("expected outline, got {:?}", other),
    }
    assert_eq!(ren.commands[2], DrawCommand::Rect { x: 6.0, y: 6.0, w: 8.0, h: 8.0, color: pal.topmost });
    assert_eq!(ren.commands[3], DrawCommand::Rect { x: 26.0, y: 26.0, w: 8.0, h: 8.0, color: pal.bottommost });

    // Scanlines 11 ..= 29 each carry one span
    let fills = ren.lines(pal.fill);
    assert_eq!(fills.len(), 19);
    assert_eq!(stats.spans, 19);
    for (i, &(x0, y0, x1, y1)) in fills.iter().enumerate() {
        assert_eq!((x0, x1), (10.0, 30.0));
        assert_eq!(y0, y1);
        assert_eq!(y0, 11.0 + i as f64);
    }

    // Debug scanline at y = 20, drawn from the viewport centre
    assert_eq!(stats.debug_crossings, 2);
    assert_eq!(stats.debug_spans, 1);
    assert_eq!(ren.lines(pal.scanline), vec![(50.0, 20.0, 100.0, 20.0)]);
    assert_eq!(ren.lines(pal.debug_span), vec![(10.0, 20.0, 30.0, 20.0)]);
    assert_eq!(scene.extent_y(), Some((10.0, 30.0)));
}

#[test]
fn invalid_polygon_still_gets_outline() {
    let mut scene = Scene::default();
    let mut ren = DrawList::new(100, 100);
    let open = &unit_square()[..4];
    match scene.render(open, &square_view(true), &mut ren) {
        Err(Error::InvalidPolygon(_)) => {},
        other => panic!("expected invalid polygon, got {:?}", other),
    }
    assert_eq!(ren.commands.len(), 2);
    assert!(matches!(ren.commands[1], DrawCommand::Lines { .. }));
    assert!(scene.extent_y().is_none());
}

#[test]
fn scene_follows_configured_fill_rule() {
    let mut twice = unit_square();
    twice.extend_from_slice(&unit_square()[1..]);
    let cfg = Config {
        fill: FillConfig { rule: FillRule::NonZero, ..FillConfig::default() },
        ..Config::default()
    };
    let mut scene = Scene::new(&cfg);
    let mut ren = DrawList::new(100, 100);
    let stats = scene.render(&twice, &square_view(false), &mut ren).unwrap();
    assert_eq!(stats.spans, 19);
    let fills = ren.lines(cfg.colors.fill);
    assert!(fills.iter().all(|&(x0, _, x1, _)| (x0, x1) == (10.0, 30.0)));

    // Even/odd cancels the doubled boundary
    let mut scene = Scene::default();
    let mut ren = DrawList::new(100, 100);
    scene.render(&twice, &square_view(false), &mut ren).unwrap();
    let fills = ren.lines(Config::default().colors.fill);
    assert!(fills.iter().all(|&(x0, _, x1, _)| x0 == x1));
}

#[test]
fn render_scanlines_counts_spans() {
    let pts : Vec<Point> = [(10.,10.), (50.,90.), (90.,10.), (10.,10.)]
        .iter().map(|&p| Point::from(p)).collect();
    let mut fill = ScanlineFill::new();
    fill.reset(&pts).unwrap();
    let mut ren = DrawList::new(100, 100);
    let n = render_scanlines(&mut fill, &mut ren, Rgba8::black());
    assert_eq!(n, 79);
    assert_eq!(ren.commands.len(), 79);
}

#[test]
fn canvas_fill_covers_interior() {
    let cfg = Config { colors: opaque_palette(), ..Config::default() };
    let mut scene = Scene::new(&cfg);
    let mut canvas = Canvas::new(40, 40);
    scene.render(&unit_square(), &square_view(false), &mut canvas).unwrap();

    let green = Rgba8::new(0, 255, 0, 255);
    let red = Rgba8::new(255, 0, 0, 255);
    assert_eq!(canvas.get(20, 20), green);
    assert_eq!(canvas.get(15, 25), green);
    assert_eq!(canvas.get(20, 10), red);
    assert_eq!(canvas.get(2, 2), Rgba8::black());
    assert_eq!(canvas.get(35, 20), Rgba8::black());
}

#[test]
fn canvas_round_trips_through_png() {
    let cfg = Config::default();
    let mut scene = Scene::new(&cfg);
    let mut canvas = Canvas::new(800, 700);
    let view = ViewState::new(&cfg.view);
    let stats = scene.render(&artwork(), &view, &mut canvas).unwrap();
    assert!(stats.spans > 500);

    let out = tmp("artwork.png");
    canvas.to_file(&out).unwrap();
    let (data, w, h) = read_file(&out).unwrap();
    assert_eq!((w, h), (canvas.width(), canvas.height()));
    assert_eq!(&data[..], canvas.as_bytes());
    assert!(img_diff(&out, &out).unwrap());

    let mut blank = Canvas::new(800, 700);
    blank.clear(cfg.colors.background);
    let other = tmp("blank.png");
    blank.to_file(&other).unwrap();
    assert!(!img_diff(&out, &other).unwrap());
}
