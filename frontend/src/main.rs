//! Roster console entry-point: load settings, pick a user directory, and run
//! the interactive session on stdin/stdout.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;
use std::sync::Arc;

use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tokio::io::BufReader;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use frontend::RosterSettings;
use frontend::domain::UserManager;
use frontend::domain::ports::UserDirectory;
use frontend::inbound::console::run_console;
use frontend::outbound::memory::InMemoryUserDirectory;
use frontend::outbound::usuarios::UsuariosHttpDirectory;

fn main() -> Result<()> {
    color_eyre::install()?;
    let settings = RosterSettings::load_from_iter(env::args_os())
        .map_err(|error| eyre!("failed to load roster settings: {error}"))?;
    init_tracing(settings.log_json);

    let directory = build_directory(&settings)?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build roster runtime")?;
    runtime.block_on(async move {
        let mut manager = UserManager::new(directory);
        run_console(
            &mut manager,
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
        )
        .await
        .wrap_err("console session failed")
    })
}

fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

fn build_directory(settings: &RosterSettings) -> Result<Arc<dyn UserDirectory>> {
    if settings.offline {
        info!("using in-memory user directory");
        return Ok(Arc::new(InMemoryUserDirectory::default()));
    }
    let collection = settings
        .base_url()
        .wrap_err("invalid roster base URL")?;
    info!(url = %collection, timeout = ?settings.timeout(), "using remote user directory");
    let directory = UsuariosHttpDirectory::new(collection, settings.timeout())
        .wrap_err("failed to build HTTP client")?;
    Ok(Arc::new(directory))
}
