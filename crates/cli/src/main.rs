mod config;
mod logging;
mod menu;

use std::io;

use inventory_core::storage::manager::StorageManager;
use inventory_core::{Inventory, LoadOutcome};
use tracing::{info, warn};

use config::CliConfig;
use menu::Menu;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::default();
    logging::init(&config.log_filter);

    let mut inventory = Inventory::new(&config.inventory_file);
    match inventory.load_default() {
        Ok(LoadOutcome::Loaded(count)) => {
            info!(count, path = %config.inventory_file.display(), "loaded inventory");
        }
        Ok(LoadOutcome::Missing) => {
            info!(path = %config.inventory_file.display(), "no inventory file yet, starting empty");
        }
        Err(e) => {
            println!("---> Error loading data: {e}");
            match StorageManager::backup_file(&config.inventory_file) {
                Ok(backup) => println!(
                    "---> The unreadable file was copied to {}. Saving on exit will overwrite {}.",
                    backup.display(),
                    config.inventory_file.display()
                ),
                Err(backup_err) => {
                    warn!(error = %backup_err, "could not back up inventory file");
                    println!(
                        "---> Warning: saving on exit will overwrite {}.",
                        config.inventory_file.display()
                    );
                }
            }
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(inventory, stdin.lock(), stdout.lock()).run()
}
