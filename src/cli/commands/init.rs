use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

use super::open_store;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its migrations
///  - the entry collection (seeded on a fresh store)
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    let cfg = Config {
        database: db_path.clone(),
        ..Config::load()?
    };

    println!("⚙️  Initializing tyme…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let store = open_store(&cfg)?;
    store.backend().audit(
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    println!(
        "✅ Database initialized at {} ({} entries)",
        &db_path,
        store.entries().len()
    );
    Ok(())
}
