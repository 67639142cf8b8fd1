/// High-level command line app
mod app;
/// Definition of command-line args
mod args;
/// Command-line args after defaults and validation
mod settings;
/// Progress messages on stderr
mod ui;

// exported for tests:
pub use app::App;
pub use args::Args;
pub use settings::{Settings, Target};

/// Parse the command line, set up logging, and order the requested tasks.
pub fn run() -> Result<(), anyhow::Error> {
    use clap::Parser;
    let settings: Settings = Args::parse().try_into()?;

    simple_logging::log_to_stderr(log_level(settings.verbose));

    App::new(settings).run()
}

/// Each `-v` turns logging up one notch, starting from warnings.
fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
