use crate::db::log::ttlog;
use crate::ui::messages::{notice, warning};
use rusqlite::{Connection, Result};

/// Schema steps, applied in order. `PRAGMA user_version` holds the number
/// of steps already applied.
const MIGRATIONS: &[(&str, &str)] = &[
    (
        "create_log_table",
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    ),
    (
        "create_kv_table",
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    ),
];

fn current_version(conn: &Connection) -> Result<usize> {
    let v: i64 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    Ok(v.max(0) as usize)
}

fn set_version(conn: &Connection, version: usize) -> Result<()> {
    // PRAGMA does not accept bound parameters
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
}

/// Public entry point: run all pending migrations.
///
/// Returns how many steps were applied (0 on an up-to-date database).
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    let start = current_version(conn)?;

    if start > MIGRATIONS.len() {
        warning(format!(
            "Database schema version {start} is newer than this build knows ({}).",
            MIGRATIONS.len()
        ));
        return Ok(0);
    }

    for (idx, (name, sql)) in MIGRATIONS.iter().enumerate().skip(start) {
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(sql)?;
        set_version(&tx, idx + 1)?;
        tx.commit()?;

        notice(format!("Applied migration '{name}'."));

        // the log table exists from step 1 onwards
        if let Err(e) = ttlog(conn, "migration_applied", name, "Schema migration applied") {
            warning(format!("Failed to write internal log: {e}"));
        }
    }

    Ok(MIGRATIONS.len() - start)
}
