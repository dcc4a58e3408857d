extern crate rust_raytracer as root;

use root::config::{get_settings, Config};
use root::geometry::SphereIds;
use root::scenes::render_scene;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use structopt::StructOpt;
use tracing::level_filters::LevelFilter;
use tracing::{error, info, warn};

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
    /// render only the scene whose file stem matches
    #[structopt(long)]
    pub only: Option<String>,
}

fn parse_log_level(level: &str, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "trace" => LevelFilter::TRACE,
        "error" => LevelFilter::ERROR,
        "debug" => LevelFilter::DEBUG,
        "off" => LevelFilter::OFF,
        _ => default,
    }
}

fn render_all(config: &Config, only: Option<&str>) -> anyhow::Result<()> {
    let output_directory = PathBuf::from(&config.output_directory);
    fs::create_dir_all(&output_directory).with_context(|| {
        format!(
            "couldn't create output directory {}",
            output_directory.display()
        )
    })?;

    let ids = SphereIds::new();
    let mut rendered = 0;
    for scene in &config.scenes {
        if only.map_or(false, |name| name != scene.name()) {
            continue;
        }
        let now = Instant::now();
        let canvas = render_scene(scene, &ids)
            .with_context(|| format!("couldn't set up scene {}", scene.name()))?;
        info!(
            "rendered {} in {}s",
            scene.name(),
            (now.elapsed().as_millis() as f32) / 1000.0
        );
        let path = output_directory.join(scene.filename());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        canvas
            .save(&path)
            .with_context(|| format!("couldn't save {}", path.display()))?;
        rendered += 1;
    }
    if rendered == 0 {
        warn!("no scenes were rendered");
    }
    Ok(())
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let config = get_settings(&opts.config_file)
        .with_context(|| format!("couldn't load {}", opts.config_file))?;

    let threads = config.threads.unwrap_or(1).max(1);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads as usize)
        .build_global()?;
    info!(
        "loaded {} scenes from {}, using {} threads",
        config.scenes.len(),
        opts.config_file,
        threads
    );

    if opts.dry_run {
        for scene in &config.scenes {
            info!("would render {} to {}", scene.name(), scene.filename());
        }
        return Ok(());
    }
    render_all(&config, opts.only.as_deref())
}

fn main() {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&opts.log_level, LevelFilter::INFO))
        .init();

    if let Err(e) = run(opts) {
        error!("{:?}", e);
        std::process::exit(1);
    }
}
