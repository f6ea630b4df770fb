use axum::{routing::get, Json};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

use mondrian_recolor::{Reference, Rgb};
use neon_mondrian::api;
use neon_mondrian::models::{AppConfig, ParamsUpdate, ParamsView};
use neon_mondrian::rendering;
use neon_mondrian::server;
use neon_mondrian::services::BackgroundGenerator;

#[derive(Parser)]
#[command(name = "neon-mondrian")]
#[command(about = "Neon Mondrian - recolor photographs into a reference-hue palette")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recolor a PNG and write the result
    Render(RenderArgs),
    /// Start the HTTP studio for one source image
    Serve {
        /// Source PNG
        #[arg(short, long)]
        input: PathBuf,

        /// Fit the source to this height before recoloring
        #[arg(long)]
        height: Option<u32>,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Source PNG
    #[arg(short, long)]
    input: PathBuf,

    /// Output PNG path (default from config, else neon-mondrian.png)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Substitute for red, as hex
    #[arg(long)]
    red: Option<String>,

    /// Substitute for yellow, as hex
    #[arg(long)]
    yellow: Option<String>,

    /// Substitute for blue, as hex
    #[arg(long)]
    blue: Option<String>,

    /// Background color, as hex
    #[arg(long, conflicts_with = "seed")]
    background: Option<String>,

    /// Seed for the random background
    #[arg(long)]
    seed: Option<u64>,

    /// Classification threshold (clamped to 0..=150)
    #[arg(long, allow_negative_numbers = true)]
    threshold: Option<i64>,

    /// Source weight in the blend (clamped to 0..=255)
    #[arg(long, allow_negative_numbers = true)]
    transparency: Option<i64>,

    /// Fit the source to this height before recoloring
    #[arg(long)]
    height: Option<u32>,

    /// Write the untouched source instead of recoloring
    #[arg(long)]
    reset: bool,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Neon Mondrian API",
        description = "Live recoloring studio for a single source image",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_frame_png,
        api::handle_recompute,
        api::handle_reset,
        api::handle_background,
        api::handle_get_params,
        api::handle_update_params,
    ),
    components(schemas(
        api::FrameResponse,
        api::BackgroundResponse,
        ParamsUpdate,
        ParamsView,
    )),
    tags(
        (name = "Frame", description = "Frame retrieval and passes"),
        (name = "Parameters", description = "Substitutes, background, threshold and transparency")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render(args)) => run_render_command(args),
        Some(Commands::Serve { input, height }) => run_server(&input, height).await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn config_path() -> Option<PathBuf> {
    std::env::var("CONFIG_FILE").ok().map(PathBuf::from)
}

/// Recolor a PNG directly to a file (no server needed)
fn run_render_command(args: RenderArgs) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "neon_mondrian=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = AppConfig::load(config_path().as_deref());

    let background = match (&args.background, config.fixed_background()?) {
        (Some(hex), _) => hex
            .parse::<Rgb>()
            .map_err(|e| anyhow::anyhow!("Invalid --background: {e}"))?,
        (None, Some(bg)) if args.seed.is_none() => bg,
        _ => BackgroundGenerator::new(args.seed.or(config.seed)).next_color(),
    };

    let overrides = ParamsUpdate {
        red: args.red,
        yellow: args.yellow,
        blue: args.blue,
        background: None,
        threshold: args.threshold,
        transparency: args.transparency,
    };
    let snapshot = overrides
        .apply(config.base_snapshot(background)?)
        .map_err(|e| anyhow::anyhow!("Invalid color: {e}"))?;

    let input = std::fs::read(&args.input)?;
    let height = args.height.or(config.resize_height);
    let png_bytes = rendering::recolor_png(&input, &snapshot, height, args.reset)
        .map_err(|e| anyhow::anyhow!("Render error: {e}"))?;

    let output = args.output.unwrap_or(config.output);
    std::fs::write(&output, &png_bytes)?;

    println!("Rendered {} ({} bytes)", output.display(), png_bytes.len());
    if !args.reset {
        println!(
            "  background {}  threshold {}  transparency {}",
            snapshot.background,
            snapshot.threshold.get(),
            snapshot.transparency.get()
        );
        for reference in Reference::PRIORITY {
            println!(
                "  {:<6} -> {}",
                reference.name(),
                snapshot.substitutes[reference]
            );
        }
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Neon Mondrian v{VERSION}");
    println!("Recolor photographs into a reference-hue palette\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let config_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    let config = AppConfig::load(config_path().as_deref());

    println!("\nConfiguration: {config_source}");
    println!("  red          = {}", config.substitutes.red);
    println!("  yellow       = {}", config.substitutes.yellow);
    println!("  blue         = {}", config.substitutes.blue);
    println!("  threshold    = {}", config.threshold);
    println!("  transparency = {}", config.transparency);
    println!(
        "  background   = {}",
        config.background.as_deref().unwrap_or("(random)")
    );

    println!("\nCommands:");
    println!("  neon-mondrian render   Recolor a PNG to a file");
    println!("  neon-mondrian serve    Start the HTTP studio");
    println!("\nRun 'neon-mondrian --help' for more details.");
}

/// Run the HTTP studio
async fn run_server(input: &Path, height: Option<u32>) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "neon_mondrian=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load(config_path().as_deref());
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let bytes = std::fs::read(input)?;
    let source = rendering::load_source(&bytes, height.or(config.resize_height))
        .map_err(|e| anyhow::anyhow!("Failed to load {}: {e}", input.display()))?;

    tracing::info!(
        input = %input.display(),
        width = source.width(),
        height = source.height(),
        "Source image loaded"
    );

    let state = server::create_app_state(source, &config)?;

    // OpenAPI document (production only)
    let app = server::build_router(state).route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    );

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Neon Mondrian studio listening");

    axum::serve(listener, app).await?;

    Ok(())
}
