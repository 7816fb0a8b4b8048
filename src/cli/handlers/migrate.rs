//! `evcharge migrate`

use crate::config::Settings;
use crate::db::{pending_migrations, revert_migrations, run_pending_migrations};
use crate::error::AppResult;

pub struct MigrateCommandHandler {
    config: Settings,
}

impl MigrateCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Lists pending migrations on `dry_run`, reverts `rollback` steps when
    /// given, and otherwise applies everything pending.
    ///
    /// # Errors
    /// - Database configuration is invalid
    /// - The database cannot be reached
    /// - A migration fails, or fewer than `rollback` migrations are applied
    pub async fn execute(&self, dry_run: bool, rollback: Option<u32>) -> AppResult<()> {
        self.config.database.validate()?;
        let url = &self.config.database.url;

        if dry_run {
            let pending = pending_migrations(url).await?;
            if pending.is_empty() {
                println!("✓ No pending migrations - database is up to date");
            } else {
                println!("Found {} pending migration(s):", pending.len());
                print_names(&pending);
                println!("\nRun without --dry-run to apply them");
            }
            return Ok(());
        }

        if let Some(steps) = rollback {
            println!("Rolling back {} migration(s)...", steps);
            let reverted = revert_migrations(url, steps).await?;
            tracing::info!(count = reverted.len(), "Migrations reverted");
            println!("✓ Rolled back {} migration(s):", reverted.len());
            print_names(&reverted);
            return Ok(());
        }

        println!("Running database migrations...");
        let applied = run_pending_migrations(url).await?;
        tracing::info!(count = applied.len(), "Migrations applied");
        if applied.is_empty() {
            println!("✓ No migrations to apply - database is already up to date");
        } else {
            println!("✓ Applied {} migration(s):", applied.len());
            print_names(&applied);
        }

        Ok(())
    }
}

fn print_names(names: &[String]) {
    for name in names {
        println!("  - {}", name);
    }
}
