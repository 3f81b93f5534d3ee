//! Regions command implementation.

use anyhow::Result;
use stevedore_core::ALLOWED_REGIONS;

/// Prints the artifact-registry locations the sync accepts.
///
/// # Errors
///
/// Never fails; the signature matches the command dispatch.
pub fn run() -> Result<()> {
    println!("Supported artifact-registry locations:");
    for region in ALLOWED_REGIONS {
        println!("  {region}");
    }
    Ok(())
}
