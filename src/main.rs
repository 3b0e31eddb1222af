mod app;
mod camera;
mod components;
mod config;
mod engine;
mod quad;
mod renderer;
mod scene;
mod systems;

use anyhow::{anyhow, Result};
use app::App;
use clap::Parser;
use config::{
    parse_trigger_key, QuadConfig, DEFAULT_AMPLITUDE, DEFAULT_HEIGHT, DEFAULT_TRIGGER_KEY,
    DEFAULT_WIDTH,
};
use engine::window::GameWindow;

#[derive(Parser)]
#[command(name = "jitter-quad", about = "Procedural quad that jitters while a key is held")]
struct Args {
    /// Quad width
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: f32,

    /// Quad height
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: f32,

    /// Largest per-axis offset applied to a vertex in one frame
    #[arg(long, default_value_t = DEFAULT_AMPLITUDE)]
    amplitude: f32,

    /// SDL key name that enables jitter while held
    #[arg(long, default_value = DEFAULT_TRIGGER_KEY)]
    key: String,

    /// RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Exit after this many frames
    #[arg(long)]
    frames: Option<u64>,

    #[arg(long, default_value_t = 1280)]
    window_width: u32,

    #[arg(long, default_value_t = 720)]
    window_height: u32,
}

impl Args {
    fn into_config(self) -> Result<QuadConfig> {
        let config = QuadConfig {
            width: self.width,
            height: self.height,
            amplitude: self.amplitude,
            trigger: parse_trigger_key(&self.key)?,
            seed: self.seed.unwrap_or_else(rand::random),
            frame_limit: self.frames,
            window_size: (self.window_width, self.window_height),
        };
        config.validate()?;
        Ok(config)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(Args::parse()) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = args.into_config()?;
    log::info!(
        "hold {:?} to jitter (seed {})",
        config.trigger,
        config.seed
    );

    let sdl = sdl2::init().map_err(|e| anyhow!("SDL init failed: {e}"))?;
    let (w, h) = config.window_size;
    let window = GameWindow::new(&sdl, "Jitter Quad", w, h)
        .map_err(|e| anyhow!("window creation failed: {e}"))?;

    let mut app = App::new(&config)?;
    app.run(&sdl, &window)
}
