//! Heroes map explorer console binary.
//!
//! ```bash
//! HEROES_SEED=7 cargo run -p heroes-client
//! ```

use std::io;

use anyhow::Result;
use heroes_client::{ClientConfig, Session, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.session_id.as_deref())?;

    tracing::info!("Starting heroes client");
    let mut session = Session::from_client_config(&config)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
