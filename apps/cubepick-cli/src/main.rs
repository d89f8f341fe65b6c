use anyhow::Context;
use clap::{Parser, Subcommand};
use cubepick_common::ObjectId;
use cubepick_input::{Action, KeyBindings, screen_to_ndc};
use cubepick_picking::{Ray, pick_ray};
use cubepick_render::{DebugTextRenderer, OrbitCamera, Renderer};
use cubepick_scene::{Scene, SceneConfig};
use cubepick_select::{SelectionController, SelectionDisplay, SelectionSink};
use glam::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cubepick-cli", about = "Headless tools for the cube picker scene")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Scene configuration file (YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and scene summary
    Info,
    /// Print the scene as text
    Layout {
        /// Seconds of idle animation to apply first
        #[arg(short, long)]
        time: Option<f32>,
        /// Highlight the object with this name, e.g. Cube-1-2
        #[arg(short, long)]
        select: Option<String>,
    },
    /// Pick the object under a screen pixel, using the initial camera
    Pick {
        #[arg(short, long)]
        x: f32,
        #[arg(short, long)]
        y: f32,
        #[arg(long, default_value = "1280")]
        width: u32,
        #[arg(long, default_value = "720")]
        height: u32,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Replay a scripted click / random / escape session
    Demo {
        /// RNG seed for the random selection
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

/// Prints every selection update, the way the desktop label would show it.
struct ConsoleSink;

impl SelectionSink for ConsoleSink {
    fn show(&mut self, display: &SelectionDisplay) {
        match display {
            SelectionDisplay::Selected { name, .. } => println!("  label: Selected: {name}"),
            SelectionDisplay::Empty => println!("  label: None"),
        }
    }
}

#[derive(Serialize)]
struct PickReport {
    x: f32,
    y: f32,
    ndc: [f32; 2],
    hit: Option<HitReport>,
}

#[derive(Serialize)]
struct HitReport {
    id: u32,
    name: String,
    distance: f32,
    point: [f32; 3],
}

fn pick_report(scene: &Scene, camera: &OrbitCamera, x: f32, y: f32, width: u32, height: u32) -> PickReport {
    let ndc = screen_to_ndc(Vec2::new(x, y), width, height);
    let ray = Ray::from_ndc(ndc, camera);
    let hit = pick_ray(&ray, scene).and_then(|hit| {
        scene.get(hit.id).map(|object| HitReport {
            id: hit.id.0,
            name: object.name.clone(),
            distance: hit.distance,
            point: hit.point.to_array(),
        })
    });
    PickReport {
        x,
        y,
        ndc: ndc.to_array(),
        hit,
    }
}

/// Highlight the object called `name`, as if it had been clicked.
fn select_by_name(
    scene: &mut Scene,
    config: &SceneConfig,
    name: &str,
) -> anyhow::Result<ObjectId> {
    let id = scene
        .find_by_name(name)
        .with_context(|| format!("no object named {name:?}"))?;
    let mut controller = SelectionController::new(config.highlight);
    controller.select(scene, id, &mut Vec::<SelectionDisplay>::new());
    Ok(id)
}

/// One scripted step of the demo and the state it left behind.
#[derive(Debug)]
struct DemoStep {
    step: &'static str,
    selection: Option<String>,
    highlighted: usize,
}

/// Replay click center, click empty space, R, Escape, Escape against a
/// fresh scene. Label updates go to `sink`.
fn run_demo<S: SelectionSink>(config: &SceneConfig, seed: u64, sink: &mut S) -> Vec<DemoStep> {
    let mut scene = Scene::from_config(config);
    let camera = OrbitCamera::from_config(&config.camera, 16.0 / 9.0);
    let mut controller = SelectionController::new(config.highlight);
    let keys = KeyBindings::default();
    let mut rng = StdRng::seed_from_u64(seed);

    let script = [
        ("click screen center", Action::Pick(Vec2::ZERO)),
        ("click empty corner", Action::Pick(Vec2::new(-0.95, 0.95))),
        ("press R", keys.action_for_key("R")),
        ("press Escape", keys.action_for_key("Escape")),
        ("press Escape again", keys.action_for_key("Escape")),
    ];

    script
        .into_iter()
        .map(|(step, action)| {
            let selected = controller.handle(action, &mut scene, &camera, &mut *sink, &mut rng);
            DemoStep {
                step,
                selection: selected.and_then(|id| scene.get(id)).map(|o| o.name.clone()),
                highlighted: scene.styled_count(),
            }
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = SceneConfig::load_or_default(cli.config.as_deref())
        .context("failed to load scene configuration")?;

    match cli.command {
        Commands::Info => {
            let scene = Scene::from_config(&config);
            println!("cubepick-cli v{}", env!("CARGO_PKG_VERSION"));
            println!(
                "grid: {0}x{0}, spacing={1}, cube size={2}",
                config.grid.grid_size, config.grid.spacing, config.grid.cube_size
            );
            println!("objects: {}", scene.len());
            println!(
                "highlight: color={} emissive={} scale={}",
                config.highlight.color, config.highlight.emissive, config.highlight.scale
            );
            println!(
                "camera: eye={} target={} fov={}",
                config.camera.eye, config.camera.target, config.camera.fov_degrees
            );
        }
        Commands::Layout { time, select } => {
            let mut scene = Scene::from_config(&config);
            if let Some(t) = time {
                scene.apply_idle_animation(t);
            }
            let selected = match select {
                Some(name) => Some(select_by_name(&mut scene, &config, &name)?),
                None => None,
            };
            let camera = OrbitCamera::from_config(&config.camera, 16.0 / 9.0);
            print!("{}", DebugTextRenderer::new().render(&scene, &camera, selected));
        }
        Commands::Pick {
            x,
            y,
            width,
            height,
            json,
        } => {
            let scene = Scene::from_config(&config);
            let camera =
                OrbitCamera::from_config(&config.camera, width.max(1) as f32 / height.max(1) as f32);
            let report = pick_report(&scene, &camera, x, y, width, height);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                match &report.hit {
                    Some(hit) => println!(
                        "hit {} (#{}) at distance {:.3}",
                        hit.name, hit.id, hit.distance
                    ),
                    None => println!("no hit"),
                }
            }
        }
        Commands::Demo { seed } => {
            println!("Demo: seed={seed}");
            for step in run_demo(&config, seed, &mut ConsoleSink) {
                println!(
                    "> {}: selection={} highlighted={}",
                    step.step,
                    step.selection.as_deref().unwrap_or("None"),
                    step.highlighted
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_pixel_hits_middle_cube() {
        let config = SceneConfig::default();
        let scene = Scene::from_config(&config);
        let camera = OrbitCamera::from_config(&config.camera, 1280.0 / 720.0);

        let report = pick_report(&scene, &camera, 640.0, 360.0, 1280, 720);
        let hit = report.hit.unwrap();
        assert_eq!(hit.name, "Cube-1-1");
        assert_eq!(hit.id, 4);
        assert!(hit.distance > 0.0);
    }

    #[test]
    fn demo_replays_click_miss_random_escape() {
        let mut updates: Vec<SelectionDisplay> = Vec::new();
        let steps = run_demo(&SceneConfig::default(), 42, &mut updates);

        let selections: Vec<Option<&str>> =
            steps.iter().map(|s| s.selection.as_deref()).collect();
        assert_eq!(selections[0], Some("Cube-1-1"));
        // Clicking empty space keeps the selection.
        assert_eq!(selections[1], Some("Cube-1-1"));
        assert!(selections[2].is_some());
        assert_eq!(&selections[3..], [None, None]);
        assert_eq!(
            steps.iter().map(|s| s.highlighted).collect::<Vec<_>>(),
            [1, 1, 1, 0, 0]
        );

        // Miss and the second Escape do not notify the label.
        assert_eq!(updates.len(), 3);
        assert_eq!(updates[0].name(), Some("Cube-1-1"));
        assert_eq!(updates[1].name(), selections[2]);
        assert_eq!(updates[2], SelectionDisplay::Empty);
    }

    #[test]
    fn layout_selection_by_name() {
        let config = SceneConfig::default();
        let mut scene = Scene::from_config(&config);
        let id = select_by_name(&mut scene, &config, "Cube-2-0").unwrap();
        assert_eq!(id, ObjectId(6));
        assert_eq!(scene.styled_count(), 1);
        assert!(select_by_name(&mut scene, &config, "Sphere").is_err());
    }

    #[test]
    fn corner_pixel_misses() {
        let config = SceneConfig::default();
        let scene = Scene::from_config(&config);
        let camera = OrbitCamera::from_config(&config.camera, 1280.0 / 720.0);

        let report = pick_report(&scene, &camera, 10.0, 10.0, 1280, 720);
        assert!(report.hit.is_none());
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["hit"].is_null());
    }
}
