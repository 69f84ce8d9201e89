use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use eframe::egui;
use log::info;

use slideshow::app::{state::AppState, SlideshowApp};
use slideshow::timer::IntervalPreset;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Randomized fullscreen slideshow of every image below a folder"
)]
struct Args {
    /// Folder to scan at startup, as if picked with "Select a folder"
    #[arg(value_name = "DIRECTORY")]
    directory: Option<PathBuf>,

    /// Time each image stays on screen: 30s, 45s, 60s, 2mn or 5mn
    #[arg(short, long, default_value_t = IntervalPreset::Secs60)]
    interval: IntervalPreset,

    /// Present in the normal window instead of switching to fullscreen
    #[arg(short, long, default_value_t = false)]
    windowed: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut state = AppState::new(args.interval);
    if let Some(directory) = &args.directory {
        state.folder_chosen(directory);
    }
    let fullscreen = !args.windowed;
    info!("Starting slideshow, interval {}", args.interval);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Slideshow")
            .with_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Slideshow",
        native_options,
        Box::new(move |_cc| Ok(Box::new(SlideshowApp::new(state, fullscreen)) as Box<dyn eframe::App>)),
    )
    .map_err(|err| anyhow!("{err}"))?;

    Ok(())
}
