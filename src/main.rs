//! Cubedit - headless session runner

use std::path::PathBuf;

use cubedit::core::{camera::PickCamera, logging, Error, Result};
use cubedit::editor::{EditorConfig, EditorController, SessionScript};
use cubedit::render::FrameLog;

fn main() {
    logging::init();
    log::info!("Cubedit starting...");

    let args: Vec<String> = std::env::args().collect();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    let config = match parse_path_arg(args, "--config", "-c") {
        Some(path) => {
            log::info!("Loading config from: {}", path.display());
            EditorConfig::load_or_default(&path)?
        }
        None => EditorConfig::default(),
    };

    let script = match parse_path_arg(args, "--script", "-s") {
        Some(path) => {
            log::info!("Replaying script: {}", path.display());
            SessionScript::load(&path)?
        }
        None => {
            log::info!("No script given, running the demo session");
            SessionScript::demo()
        }
    };

    let mut editor = EditorController::new(config);
    let mut camera = PickCamera::default();
    let mut renderer = FrameLog::new();
    let summary = script.run(&mut editor, &mut camera, &mut renderer);

    let json = serde_json::to_string_pretty(&summary).map_err(|e| Error::Script(e.to_string()))?;
    println!("{json}");
    Ok(())
}

fn parse_path_arg(args: &[String], long: &str, short: &str) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == long || args[i] == short {
            if let Some(value) = args.get(i + 1) {
                return Some(PathBuf::from(value));
            }
        }
    }
    None
}
