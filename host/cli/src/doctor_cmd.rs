//! CLI Doctor Command
//!
//! Checks the resolved configuration and the bits of the environment the
//! page flow depends on.

use anyhow::Result;
use std::path::Path;

use nacelle_config::HostConfig;

/// Executes the full doctor diagnosis.
pub fn run(config_path: &Path, config: &HostConfig) -> Result<()> {
    println!("\n🔍 Running Nacelle Doctor...\n");

    let checks = [
        check_config_file(config_path),
        check_bindings(config),
        check_manifest(config),
        check_log_dir(config),
    ];
    let is_ok = checks.iter().all(|&ok| ok);

    println!();
    if is_ok {
        println!("✅ All checks passed! Nacelle is healthy.");
    } else {
        println!("❌ Some checks failed! Please fix the errors above.");
    }

    Ok(())
}

fn check_config_file(path: &Path) -> bool {
    println!("Checking Config File:");
    if path.exists() {
        println!("  🟢 {} found", path.display());
    } else {
        println!("  🟡 {} missing (defaults in use)", path.display());
    }
    true
}

fn check_bindings(config: &HostConfig) -> bool {
    println!("Checking Page Bindings:");

    let bindings = [
        ("statusElementId", config.page.status_element_id.as_str()),
        ("nameFieldId", config.page.name_field_id.as_str()),
        ("module.elementId", config.module.element_id.as_str()),
    ];

    let mut all_good = true;
    for (key, value) in bindings {
        if value.is_empty() {
            println!("  🔴 {} is empty (REQUIRED)", key);
            all_good = false;
        } else {
            println!("  🟢 {} = \"{}\"", key, value);
        }
    }
    all_good
}

fn check_manifest(config: &HostConfig) -> bool {
    println!("Checking Module Manifest:");
    let manifest = &config.module.manifest_path;
    if manifest.is_empty() {
        println!("  🔴 manifestPath is empty (REQUIRED)");
        return false;
    }
    if Path::new(manifest).exists() {
        println!("  🟢 {} present on disk", manifest);
    } else {
        // The built-in module never reads it; a real host would.
        println!("  🟡 {} not found on disk (optional)", manifest);
    }
    true
}

fn check_log_dir(config: &HostConfig) -> bool {
    println!("Checking Log Directory:");
    match &config.logging.dir {
        None => {
            println!("  🟡 no log directory configured (console only)");
            true
        }
        Some(dir) => match std::fs::create_dir_all(dir) {
            Ok(()) => {
                println!("  🟢 {} is writable", dir);
                true
            }
            Err(e) => {
                println!("  🔴 {} is not writable: {}", dir, e);
                false
            }
        },
    }
}
