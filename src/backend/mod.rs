use anyhow::Result;

use crate::config::Config;

pub mod wayland;

/// Run Wayland backend with full event loop
///
/// # Arguments
/// * `config` - Validated configuration, with command-line overrides applied
pub fn run_wayland(config: Config) -> Result<()> {
    let backend = wayland::WaylandBackend::new(config);
    backend.run()
}
