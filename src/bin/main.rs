extern crate rust_raytracer as root;

use root::parsing::config::{get_settings, TOMLConfig};
use root::parsing::construct_scene;
use root::prelude::*;
use root::renderer::{NaiveRenderer, Renderer};

use structopt::StructOpt;
use tracing::{error, info, Level};

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long)]
    pub scene_file: Option<String>,
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn parse_log_level(level: &str, default: Level) -> Level {
    match level.to_lowercase().as_str() {
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "trace" => Level::TRACE,
        "error" => Level::ERROR,
        "debug" => Level::DEBUG,
        _ => default,
    }
}

fn describe(world: &World, camera: &Camera) {
    info!(
        "scene has {} shapes, light: {}",
        world.shapes.len(),
        world
            .light
            .map(|l| format!("{:?} at {:?}", l.intensity, l.position))
            .unwrap_or_else(|| String::from("none"))
    );
    info!(
        "camera is {}x{} with a {:.1} degree field of view",
        camera.hsize,
        camera.vsize,
        camera.field_of_view.to_degrees()
    );
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&opts.log_level, Level::INFO))
        .init();

    let mut config: TOMLConfig = get_settings(&opts.config_file).inspect_err(|e| {
        error!("couldn't read {}, {:?}", opts.config_file, e);
    })?;

    let threads = config.max_threads().unwrap_or(1).max(1);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads as usize)
        .build_global()?;
    info!("using {} render threads", threads);

    // override scene file based on provided command line argument
    config.default_scene_file = opts.scene_file.unwrap_or(config.default_scene_file);
    let (world, camera) = construct_scene(&config.default_scene_file).inspect_err(|e| {
        error!("fatal error parsing world, aborting. error is {:?}", e);
    })?;
    describe(&world, &camera);

    if opts.dry_run {
        info!("dry run, skipping render");
        return Ok(());
    }

    let renderer: Box<dyn Renderer> = Box::new(NaiveRenderer::new());
    renderer
        .render(&world, &camera, &config.render_settings)
        .inspect_err(|e| error!("render failed: {:?}", e))
}
