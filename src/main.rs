use clap::{ArgAction, Parser};
use signalbox::config::ConfigSource;
use signalbox::display::{self, ChangeTracker};
use signalbox::observability::init_logging;
use signalbox::Intersection;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

/// Run a four-way intersection and draw its lights on the terminal.
#[derive(Parser, Debug)]
#[command(name = "signalbox", author, version, about)]
struct Cli {
    /// JSON intersection configuration. Built-in timings are used when absent.
    #[arg(short, long, env = "SIGNALBOX_CONFIG")]
    config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Milliseconds between ticks.
    #[arg(long, default_value_t = 10)]
    poll_ms: u64,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = cli.config.map_or(ConfigSource::Defaults, ConfigSource::File);
    let mut intersection = Intersection::system();
    if let Err(error) = intersection.init(&source) {
        eprintln!("signalbox: {error}; running built-in timings");
    }

    let mut tracker = ChangeTracker::new();
    let stdout = std::io::stdout();
    loop {
        intersection.poll();
        if tracker.changed(intersection.table()) {
            let mut out = stdout.lock();
            let frame = display::render(intersection.table());
            if write!(out, "{}{frame}", display::CLEAR_SCREEN)
                .and_then(|()| out.flush())
                .is_err()
            {
                break;
            }
        }
        std::thread::sleep(Duration::from_millis(cli.poll_ms));
    }
}
