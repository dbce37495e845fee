//! Status command handler

use anyhow::Result;

use roster_core::{Config, EmployeeStore, SCHEMA_VERSION};

use crate::output::{Output, OutputFormat};

/// Show status information
pub fn show(config: &Config, store: &EmployeeStore, output: &Output) -> Result<()> {
    let snapshot_path = config.employees_path();
    let snapshot_exists = snapshot_path.exists();
    let snapshot_size = if snapshot_exists {
        std::fs::metadata(&snapshot_path).map(|m| m.len()).ok()
    } else {
        None
    };

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "schema_version": SCHEMA_VERSION,
                    "language": config.language.code(),
                    "storage": {
                        "data_dir": config.data_dir,
                        "snapshot_path": snapshot_path,
                        "snapshot_exists": snapshot_exists,
                        "snapshot_size": snapshot_size
                    },
                    "counts": {
                        "employees": store.len()
                    }
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", store.len());
        }
        OutputFormat::Human => {
            println!("Roster Status");
            println!("=============");
            println!();
            println!("Storage:");
            println!("  Location: {}", config.data_dir.display());
            println!("  Snapshot: {}", snapshot_path.display());
            println!(
                "  Present:  {}",
                if snapshot_exists { "yes" } else { "no" }
            );
            if let Some(size) = snapshot_size {
                println!("  Size:     {} bytes", size);
            }
            println!("  Schema:   v{}", SCHEMA_VERSION);
            println!();
            println!("Settings:");
            println!("  Language: {}", config.language.code());
            println!();
            println!("Contents:");
            println!("  Employees: {}", store.len());
        }
    }

    Ok(())
}
