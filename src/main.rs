//! hash-router CLI
//!
//! Loads a route table and resolves URL fragments against it, printing every
//! activation as a JSON line.
//!
//! ```text
//! hash-router --config routes.toml '#/books/42?tab=reviews' '/nowhere'
//! printf '/home\n/books/7\n' | hash-router --config routes.toml
//! ```

use std::cell::RefCell;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use serde::Serialize;

use hash_router::config::{read_config, validated, ConfigError, RouterConfig};
use hash_router::observability::logging::init_logging;
use hash_router::routing::{CallbackError, Params, Resolution, RouteMatch, Router};

#[derive(Parser)]
#[command(name = "hash-router")]
#[command(about = "Resolve URL fragments against a route table", long_about = None)]
struct Cli {
    /// Route table (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured default hash.
    #[arg(short, long)]
    default: Option<String>,

    /// Fragments to resolve; read from stdin when omitted.
    fragments: Vec<String>,
}

#[derive(Serialize)]
struct Activation<'a> {
    hash: &'a str,
    outcome: &'static str,
    name: Option<String>,
    pattern: Option<String>,
    params: Option<Params>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = load(&cli)?;

    init_logging(&config.observability);
    tracing::info!(routes = config.routes.len(), default = ?config.default_hash, "Route table loaded");

    // Label of the route whose callback ran last
    let activated: Rc<RefCell<Option<String>>> = Rc::default();
    let mut router = Router::from_config(&config, |route| {
        let activated = activated.clone();
        let label = route.label().to_string();
        move |_: &RouteMatch| -> Result<(), CallbackError> {
            *activated.borrow_mut() = Some(label.clone());
            Ok(())
        }
    })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.fragments.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            resolve(&mut router, &activated, line.trim(), &mut out)?;
        }
    } else {
        for fragment in &cli.fragments {
            resolve(&mut router, &activated, fragment, &mut out)?;
        }
    }

    Ok(())
}

/// Read the route table, apply command-line overrides, then validate.
fn load(cli: &Cli) -> Result<RouterConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => RouterConfig::default(),
    };
    if cli.default.is_some() {
        config.default_hash = cli.default.clone();
    }
    validated(config)
}

/// Resolve `hash` and write one JSON line describing the outcome.
fn resolve(
    router: &mut Router,
    activated: &Rc<RefCell<Option<String>>>,
    hash: &str,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let resolution = router.start(hash);
    let outcome = match resolution {
        Resolution::Direct(_) => "direct",
        Resolution::Default(_) => "default",
        Resolution::NoMatch => "miss",
    };

    // A miss reports the retained current route
    let current = router.current();
    let activation = Activation {
        hash,
        outcome,
        name: activated.borrow().clone(),
        pattern: current.pattern,
        params: current.params,
    };
    serde_json::to_writer(&mut *out, &activation)?;
    writeln!(out)?;
    Ok(())
}
