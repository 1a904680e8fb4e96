use chrono::Duration;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod catalog;
mod conflict;
mod display;
mod error;
mod filter;
mod ics;
mod info;
mod selection;
mod utils;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::selection::Session;

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Args {
    /// The course catalog, a JSON file or an URL, i.e.: courses.json
    #[clap(value_parser)]
    catalog: String,

    /// Add a course by its acronym before anything else, can be repeated
    #[clap(short, long, value_name = "ACRONYM")]
    add: Vec<String>,

    /// Export to iCalendar format (.ics)
    #[clap(short, long, value_name = "FILE NAME")]
    export: Option<String>,

    /// Length of an exam in the exported calendar
    #[clap(short, long, value_name = "MINUTES", default_value_t = 150)]
    duration: u32,

    /// Don't ask anything, only show the exams given with --add
    #[clap(short, long)]
    no_interactive: bool,

    /// Show what happens under the hood
    #[clap(short, long)]
    verbose: bool,
}

/// Logs go to stderr, `RUST_LOG` wins over `--verbose`
fn init_logger(verbose: bool) {
    let default = if verbose { "examtor=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args) -> Result<()> {
    let user_agent = format!("examtor/{}", env!("CARGO_PKG_VERSION"));
    let duration = Duration::minutes(i64::from(args.duration));

    println!("Loading the course catalog...");
    let catalog = Catalog::load(&args.catalog, &user_agent).await?;
    let mut session = Session::new(catalog);

    for acronym in &args.add {
        session.pick_acronym(acronym)?;
        session.add(None)?;
    }

    if args.no_interactive {
        display::display(session.store());
    } else {
        filter::interactive(&mut session, duration)?;
    }

    if let Some(mut filename) = args.export {
        // Export the calendar
        let written = ics::export(session.store(), &mut filename, duration)?;
        println!("Calendar exported ({written} exams) => {filename}");
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logger(args.verbose);
    info!(catalog = %args.catalog, "starting");

    if let Err(e) = run(args).await {
        error!("{e}");
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}
