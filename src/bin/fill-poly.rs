//! Headless host for the polygon fill demo
//!
//! Runs a scripted sequence of frames (pan, zoom, step the debug
//! scanline, quit) through the same update / render loop an interactive
//! host would use, and saves the last frame.
//!
//!     fill-poly [--config cfg.json] [--frames 120] [--size 800x700] [--out frame.png]

use anyhow::{bail, Context};
use log::{info, warn};

use fillpoly::{artwork, Canvas, Config, DrawTarget, Key, KeyState, Modifiers, Scene, ViewState};

const DEFAULT_FRAMES : usize = 120;
const DEFAULT_SIZE : (usize, usize) = (800, 700);
const DEFAULT_OUT : &str = "fill-poly.png";

struct Args {
    config: Option<String>,
    frames: usize,
    size: (usize, usize),
    out: String,
}

fn parse_size(s: &str) -> anyhow::Result<(usize, usize)> {
    let (w, h) = s.split_once('x').with_context(|| format!("size '{}' is not WxH", s))?;
    let w = w.parse().with_context(|| format!("bad width in '{}'", s))?;
    let h = h.parse().with_context(|| format!("bad height in '{}'", s))?;
    if w == 0 || h == 0 {
        bail!("size '{}' must be non-zero", s);
    }
    Ok((w, h))
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args { config: None, frames: DEFAULT_FRAMES,
                          size: DEFAULT_SIZE, out: DEFAULT_OUT.to_string() };
    let mut it = std::env::args().skip(1);
    while let Some(flag) = it.next() {
        let mut value = || it.next().with_context(|| format!("{} needs a value", flag));
        match flag.as_str() {
            "--config" => args.config = Some(value()?),
            "--frames" => args.frames = value()?.parse().context("--frames")?,
            "--size"   => args.size = parse_size(&value()?)?,
            "--out"    => args.out = value()?,
            other      => bail!("unknown argument '{}'", other),
        }
    }
    Ok(args)
}

/// Key state for frame `i` of `n`
///
/// Pan right, then down, zoom in a few steps, walk the debug scanline
/// down, and press Escape on the last frame.
fn scripted_keys(i: usize, n: usize) -> KeyState {
    let mut keys = KeyState::new();
    let phase = i * 4 / n.max(1);
    match phase {
        0 => keys.hold(Key::Right),
        1 => keys.hold(Key::Down),
        2 => {
            keys.modifiers = Modifiers::SHIFT;
            if i % 2 == 0 {
                keys.press(Key::Up);
            }
        },
        _ => {
            keys.modifiers = Modifiers::CONTROL;
            keys.press(Key::Down);
        },
    }
    if i + 1 == n {
        keys.press(Key::Escape);
    }
    keys
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let args = parse_args()?;
    let cfg = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config {}", path))?,
        None => Config::default(),
    };
    info!("fill-poly: {} frames at {}x{}", args.frames, args.size.0, args.size.1);

    let model = artwork();
    let mut view = ViewState::new(&cfg.view);
    let mut scene = Scene::with_capacity(&cfg, model.len());
    let mut canvas = Canvas::new(args.size.0, args.size.1);

    let mut frame = 0;
    while ! view.quit && frame < args.frames {
        let keys = scripted_keys(frame, args.frames);
        view.update(&keys, canvas.viewport(), scene.extent_y());
        match scene.render(&model, &view, &mut canvas) {
            Ok(stats) => log::debug!("frame {}: {:?}", frame, stats),
            Err(err) => warn!("frame {}: {}", frame, err),
        }
        frame += 1;
    }
    info!("fill-poly: stopped after {} frames, view {:?}", frame, view);

    canvas.to_file(&args.out)
        .with_context(|| format!("writing {}", args.out))?;
    info!("fill-poly: wrote {}", args.out);
    Ok(())
}
