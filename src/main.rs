use anyhow::Context;
use chalkboard::{
    default_config_path, init_logging, render_to_raster, replay, BoardState, Settings,
    BUILD_DATE, VERSION,
};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "chalkboard",
    version,
    about = "Replay a whiteboard gesture script and print the resulting scene"
)]
struct Cli {
    /// JSON array of gesture events
    script: PathBuf,

    /// Settings file (JSON or TOML); defaults to the user config file when present
    #[arg(long, env = "CHALKBOARD_SETTINGS")]
    settings: Option<PathBuf>,

    /// Also render the final board to this PNG file
    #[arg(long)]
    png: Option<PathBuf>,
}

fn load_settings(explicit: Option<&Path>) -> anyhow::Result<Settings> {
    if let Some(path) = explicit {
        return Settings::load_from_file(path)
            .with_context(|| format!("loading settings from {}", path.display()));
    }
    match default_config_path() {
        Ok(path) if path.exists() => Settings::load_from_file(&path)
            .with_context(|| format!("loading settings from {}", path.display())),
        _ => Ok(Settings::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;
    tracing::info!("chalkboard {} (built {})", VERSION, BUILD_DATE);

    let settings = load_settings(cli.settings.as_deref())?;

    let events = replay::load_script(&cli.script)
        .with_context(|| format!("loading script {}", cli.script.display()))?;
    let base_dir = cli.script.parent().unwrap_or(Path::new("."));

    let mut board = BoardState::with_settings(&settings);
    replay::replay(&mut board, &events, base_dir)
        .with_context(|| format!("replaying {}", cli.script.display()))?;

    if let Some(png) = &cli.png {
        let canvas = board.canvas();
        let image = render_to_raster(
            board.scene(),
            canvas.width.ceil() as u32,
            canvas.height.ceil() as u32,
            settings.canvas.background,
        );
        image
            .save(png)
            .with_context(|| format!("writing {}", png.display()))?;
        tracing::info!("Rendered board to {}", png.display());
    }

    println!("{}", serde_json::to_string_pretty(board.scene())?);
    Ok(())
}
