use std::path::PathBuf;

use anyhow::Context;
use arena_input::{InputMap, KeyChord};
use arena_kernel::MovementLaw;
use arena_scene::{DebugTextRenderer, FrameDriver, Renderer, ScenarioConfig};
use arena_tools::{DebugLayer, WorldInspector};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "arena-cli", about = "Headless runner for the arena scene")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Drive the scene for a number of frames
    Run {
        /// Number of frames to run
        #[arg(short, long, default_value = "100")]
        frames: u64,
        #[command(flatten)]
        scenario: ScenarioArgs,
        /// Open the inspector (as if Shift+Ctrl+Alt+I were pressed) and list agents
        #[arg(long)]
        inspect: bool,
        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the assembled scene and its first frame
    Scene {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },
}

#[derive(clap::Args)]
struct ScenarioArgs {
    /// Scenario YAML file; the stock arena is used when omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,
    /// Override the per-frame step size
    #[arg(long)]
    step: Option<f32>,
    /// Override the movement law (arrive | overshoot)
    #[arg(long)]
    movement: Option<MovementLaw>,
}

impl ScenarioArgs {
    fn load(&self) -> anyhow::Result<ScenarioConfig> {
        let mut config = match &self.scenario {
            Some(path) => ScenarioConfig::load(path)
                .with_context(|| format!("loading scenario {}", path.display()))?,
            None => ScenarioConfig::demo(),
        };
        if let Some(step) = self.step {
            config.step = step;
        }
        if let Some(movement) = self.movement {
            config.movement = movement;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    match cli.command {
        Commands::Info => {
            println!("arena-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", arena_common::crate_info());
            println!("kernel: {}", arena_kernel::crate_info());
            println!("scene: {}", arena_scene::crate_info());
            println!("input: {}", arena_input::crate_info());
            println!("tools: {}", arena_tools::crate_info());
            println!("default step: {}", arena_kernel::DEFAULT_STEP);
        }
        Commands::Run {
            frames,
            scenario,
            inspect,
            json,
        } => {
            let config = scenario.load()?;
            let mut driver = FrameDriver::from_scenario(&config).context("building scene")?;
            driver.start().context("starting physics")?;

            let mut debug_layer = DebugLayer::new();
            if inspect {
                let action = InputMap::default().resolve(KeyChord::inspector());
                debug_layer.handle(action);
            }

            let run = driver.run(frames)?;
            tracing::info!(
                frames = run.frames,
                moves = run.moves,
                arrivals = run.arrivals,
                "run complete"
            );

            let world = driver.world();
            let summary = WorldInspector::summary(world);
            if json {
                let agents = WorldInspector::list_agents(world);
                let out = serde_json::json!({
                    "run": run,
                    "summary": summary,
                    "agents": agents,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{summary}");
                if debug_layer.is_visible() {
                    for info in WorldInspector::list_agents(world) {
                        println!("  {info}");
                    }
                }
            }
        }
        Commands::Scene { scenario } => {
            let config = scenario.load()?;
            let mut driver = FrameDriver::from_scenario(&config).context("building scene")?;
            driver.start().context("starting physics")?;
            let frame = DebugTextRenderer::new().render(driver.world(), driver.scene());
            print!("{frame}");
            driver.frame()?;
            let frame = DebugTextRenderer::new().render(driver.world(), driver.scene());
            print!("{frame}");
        }
    }

    Ok(())
}
