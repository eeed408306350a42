use anyhow::{Context, Result};
use signal_hook::{
    consts::signal::{SIGINT, SIGTERM},
    iterator::Signals,
};
use std::{
    sync::Arc,
    sync::atomic::{AtomicBool, Ordering},
    thread,
    time::Duration,
};

use sunarc::args::{self, CliAction, ParsedArgs, RunOptions};
use sunarc::celestial::source_from_config;
use sunarc::constants::{DEFAULT_UPDATE_INTERVAL, EXIT_FAILURE};
use sunarc::display::log_frame;
use sunarc::svg::write_svg;
use sunarc::{Config, Driver, Log, RenderFrame, SystemClock};

fn main() {
    let parsed = ParsedArgs::from_env();

    match parsed.action {
        CliAction::ShowHelp => args::display_help(),
        CliAction::ShowVersion => args::display_version_info(),
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::Run(options) => {
            if let Err(e) = run(options) {
                Log::set_enabled(true);
                Log::log_critical(&format!("{:#}", e));
                std::process::exit(EXIT_FAILURE);
            }
        }
    }
}

fn run(options: RunOptions) -> Result<()> {
    Log::set_debug(options.debug_enabled);
    // JSON output must stay machine-readable
    Log::set_enabled(!options.json);
    Log::log_version();

    let (config, config_path) = match options.config_path {
        Some(path) => (Config::load_from_path(&path)?, path),
        None => (Config::load()?, Config::get_config_path()?),
    };
    config.log_config(&config_path);

    let source = source_from_config(&config)?;
    Log::log_indented(&format!("Reading sun state from {}", source.describe()));

    let layout = config.layout()?;
    let interval =
        Duration::from_secs(config.update_interval.unwrap_or(DEFAULT_UPDATE_INTERVAL));
    let mut driver = Driver::new(source, layout, SystemClock, interval);

    let present = |frame: &RenderFrame| {
        if options.json {
            match frame.to_json() {
                Ok(json) => println!("{}", json),
                Err(e) => Log::log_error(&format!("Failed to serialize frame: {}", e)),
            }
        } else {
            log_frame(frame);
        }
        if let Some(ref path) = config.svg_output {
            if let Err(e) = write_svg(path, frame, &layout.arc) {
                Log::log_error(&format!("{:#}", e));
            }
        }
    };

    if options.once {
        match driver.tick()? {
            Some(frame) => present(frame),
            None => Log::log_warning("No sun state available; nothing to render"),
        }
        Log::log_end();
        return Ok(());
    }

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    let mut signals =
        Signals::new([SIGTERM, SIGINT]).context("Failed to register signal handlers")?;
    thread::spawn(move || {
        if signals.forever().next().is_some() {
            r.store(false, Ordering::SeqCst);
        }
    });

    driver.run(&running, present);

    Log::log_block_start("Shutting down");
    Log::log_end();
    Ok(())
}
