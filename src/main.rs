use anyhow::Context;
use clap::Parser;
use log::info;

use povanim::cli::{Cli, Mode};
use povanim::config::Settings;
use povanim::render::{dump_json, render_gif, render_mp4, render_png};
use povanim::scenes::{create_scene, SCENE_NAMES};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list {
        for name in SCENE_NAMES {
            println!("{}", name);
        }
        return Ok(());
    }

    let scene_name = cli
        .scene
        .context("no scene given; run with --list to see the catalog")?;

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    info!(
        "total time: {}s (frames: {})",
        settings.duration,
        settings.n_frames()
    );

    let mut provider = create_scene(&scene_name, &settings)?;
    let output = match cli.mode {
        Mode::Png => render_png(provider.as_mut(), &settings, cli.frame)?,
        Mode::Mp4 => render_mp4(provider.as_mut(), &settings)?,
        Mode::Gif => render_gif(provider.as_mut(), &settings)?,
        Mode::Json => dump_json(provider.as_mut(), &settings, cli.frame)?,
    };
    println!("{}", output.display());

    Ok(())
}
