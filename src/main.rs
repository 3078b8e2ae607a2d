use clap::{Parser, ValueEnum};
use live2d_core::HitBounds;
use stage_core::{
    bootstrap, BootstrapOptions, DisplayElement, DisplayRegistry, HttpAssetLoader, Live2DModel,
    Surface, SurfaceOptions,
};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_MODEL_URL: &str =
    "https://cdn.jsdelivr.net/gh/guansss/pixi-live2d-display/test/assets/shizuku/shizuku.model.json";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Model descriptor URL
    #[arg(value_name = "MODEL_URL", default_value = DEFAULT_MODEL_URL)]
    model_url: String,

    /// Write the final frame to this PNG path
    #[arg(long, value_name = "PATH")]
    snapshot: Option<PathBuf>,

    /// Viewport width
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Seconds to run the ticker
    #[arg(long, default_value_t = 3.0)]
    duration: f64,

    /// Ticker rate
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum LogFormat {
    Pretty,
    Json,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(cli.log_level.to_string().parse().unwrap())
        .from_env_lossy();

    let subscriber_builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match cli.log_format {
        LogFormat::Json => subscriber_builder.json().init(),
        LogFormat::Pretty => subscriber_builder.pretty().init(),
    }

    info!("Initializing stage...");
    info!("Model: {}", cli.model_url);

    // The hosting "document": one canvas element inside the viewport.
    let mut registry = DisplayRegistry::new(cli.width, cli.height);
    registry.register(DisplayElement::new("pio", cli.width, cli.height));

    let mut surface = match Surface::new(
        &registry,
        SurfaceOptions {
            view: "pio".to_string(),
            ..SurfaceOptions::default()
        },
    ) {
        Ok(surface) => surface,
        Err(e) => {
            error!("Surface acquisition failed: {}", e);
            std::process::exit(1);
        }
    };

    let loader = HttpAssetLoader::new();
    // The load result is not discarded: a failed bootstrap aborts the run.
    let id = match bootstrap(
        &mut surface,
        &loader,
        &cli.model_url,
        BootstrapOptions::default(),
    )
    .await
    {
        Ok(id) => id,
        Err(e) => {
            error!("Model bootstrap failed: {}", e);
            std::process::exit(1);
        }
    };

    // Real hit geometry lives in the moc; cover the whole atlas box with the
    // body region so taps land somewhere.
    let mut tap_point = None;
    if let Some(node) = surface.stage_mut().node_mut(id) {
        let (x, y) = node.transform.position();
        let (sx, sy) = node.transform.scale();
        if let Some(model) = node.renderable.as_any_mut().downcast_mut::<Live2DModel>() {
            let (w, h) = stage_core::Renderable::size(model);
            model.set_hit_bounds(
                "body",
                HitBounds::from_xywh(0.0, 0.0, w, h),
            );
            tap_point = Some((x + w * sx / 2.0, y + h * sy / 2.0));
        }
    }

    let dt = 1.0 / cli.fps as f64;
    let frames = (cli.duration * cli.fps as f64).ceil() as u64;
    for frame in 0..frames {
        if let Err(e) = surface.tick(dt) {
            error!("Render failed: {}", e);
            std::process::exit(1);
        }
        // Poke the model halfway through the run.
        if frame == frames / 2 {
            if let Some((x, y)) = tap_point {
                info!("Tapping model at ({x:.0}, {y:.0})");
                surface.dispatch_tap(x, y);
            }
        }
    }

    if let Some(path) = cli.snapshot {
        match surface.snapshot_png(&path) {
            Ok(()) => info!("Snapshot written to {:?}", path),
            Err(e) => {
                error!("Snapshot failed: {}", e);
                std::process::exit(1);
            }
        }
    }
    info!("Done after {:.2}s of stage time.", surface.time());
}
