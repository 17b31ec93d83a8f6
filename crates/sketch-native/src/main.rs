use clap::Parser;
use glam::Vec2;
use sketch_core::sketches::{dial, road};
use sketch_core::{
    AssetKind, AssetRequest, CurveSource, InputEvent, RecordingSurface, RunState, SketchKind,
    SketchRunner,
};

// Stand-in road for runs without a browser: one S-bend across a 2:1 box
const DEMO_ROAD_VIEW_BOX: &str = "0 0 1000 500";
const DEMO_ROAD_PATH: &str = "M 0 250 C 250 0 750 500 1000 250";

const DEMO_IMAGE_SIZE: Vec2 = Vec2::new(400.0, 400.0);
const DEMO_CAR_SIZE: Vec2 = Vec2::new(160.0, 80.0);
const DIAL_ARTBOARD_SIZE: Vec2 = Vec2::new(1920.0, 535.6);

/// Run one sketch headless with scripted gestures and report how it ended.
#[derive(Parser, Debug)]
#[command(name = "sketch-native", version, about)]
struct Args {
    /// flower, road, duet or dial
    #[arg(long, default_value_t = SketchKind::default())]
    sketch: SketchKind,

    /// Frames to run before giving up
    #[arg(long, default_value_t = 900)]
    frames: u32,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    #[arg(long, default_value_t = 720.0)]
    height: f32,
}

fn nominal_size(req: &AssetRequest) -> Vec2 {
    match req.name {
        road::CAR => DEMO_CAR_SIZE,
        dial::METRE | dial::CIRCLE | dial::RECTANGLE | dial::LEFT_BUBBLE | dial::RIGHT_BUBBLE => {
            DIAL_ARTBOARD_SIZE
        }
        _ => DEMO_IMAGE_SIZE,
    }
}

/// Mark every requested asset as loaded. Curves get the built-in road.
fn load_assets(runner: &mut SketchRunner) {
    let requests = runner.sketch().assets();
    for req in requests {
        match req.kind {
            AssetKind::Image => runner.assets_mut().mark_ready(req.name, nominal_size(req)),
            AssetKind::Curve => {
                let curve = CurveSource::from_svg(DEMO_ROAD_VIEW_BOX, DEMO_ROAD_PATH);
                runner.deliver_curve(req.name, curve);
            }
        }
    }
    log::info!("[native] {} assets loaded", requests.len());
}

/// Straight drag from `from` to `to`, spread over `frames` frames starting at `start`.
fn drag(frame: u32, start: u32, frames: u32, from: Vec2, to: Vec2) -> Vec<InputEvent> {
    if frame < start || frame > start + frames {
        return Vec::new();
    }
    let t = (frame - start) as f32 / frames.max(1) as f32;
    let p = from.lerp(to, t);
    if frame == start {
        vec![InputEvent::Press(p)]
    } else if frame == start + frames {
        vec![InputEvent::Move(p), InputEvent::Release(p)]
    } else {
        vec![InputEvent::Move(p)]
    }
}

fn scripted_input(kind: SketchKind, frame: u32, canvas: Vec2) -> Vec<InputEvent> {
    let center = canvas * 0.5;
    match kind {
        // Sweep horizontal cuts down the plant once it has risen.
        SketchKind::Flower => {
            let mut events = Vec::new();
            for k in 0..6 {
                let y = canvas.y * (0.25 + 0.12 * k as f32);
                events.extend(drag(
                    frame,
                    120 + k * 30,
                    10,
                    Vec2::new(0.0, y),
                    Vec2::new(canvas.x, y),
                ));
            }
            events
        }
        SketchKind::Road => match frame {
            10 => vec![InputEvent::Press(center)],
            600 => vec![InputEvent::Release(center)],
            _ => Vec::new(),
        },
        // Walk the left face in and hold it near the middle.
        SketchKind::Duet => drag(
            frame,
            120,
            300,
            Vec2::new(canvas.x * 0.25, center.y),
            Vec2::new(center.x - 160.0, center.y),
        ),
        SketchKind::Dial => {
            let radius = canvas.y * 0.3;
            if (60..=180).contains(&frame) {
                let angle = (frame - 60) as f32 / 120.0 * std::f32::consts::FRAC_PI_2;
                let p = center + Vec2::from_angle(angle) * radius;
                match frame {
                    60 => vec![InputEvent::Press(p)],
                    180 => vec![InputEvent::Release(p)],
                    _ => vec![InputEvent::Move(p)],
                }
            } else {
                Vec::new()
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let canvas = Vec2::new(args.width, args.height);
    if canvas.min_element() <= 0.0 {
        anyhow::bail!("canvas must be larger than zero, got {}x{}", args.width, args.height);
    }

    let mut runner = SketchRunner::new(args.sketch.build(canvas, args.seed)?);
    load_assets(&mut runner);

    let mut surface = RecordingSurface::new(canvas);
    let dt = runner.clock().step();
    let mut state = RunState::Running;
    let mut frames_run = 0;
    for frame in 0..args.frames {
        for event in scripted_input(args.sketch, frame, canvas) {
            runner.queue_input(event);
        }
        surface.clear_commands();
        state = runner.frame(dt, canvas, &mut surface);
        frames_run = frame + 1;
        if frame % 120 == 0 {
            log::debug!(
                "[native] frame {} tick {} commands {}",
                frame,
                runner.ticks(),
                surface.commands().len()
            );
        }
        if state == RunState::Finished {
            break;
        }
    }

    log::info!(
        "[native] {} ran {} frames ({} ticks), last frame drew {} commands, images {:?}, texts {:?}, {}",
        args.sketch,
        frames_run,
        runner.ticks(),
        surface.commands().len(),
        surface.images(),
        surface.texts(),
        if state == RunState::Finished {
            "finished"
        } else {
            "still running"
        }
    );
    Ok(())
}
