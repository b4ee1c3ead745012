//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration
//! provided as strings, including the two host-facing knobs (time-zone
//! override and simulated current date).

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CheckConfig, FlagguardConfigV1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `flagguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<FlagguardConfigV1> {
    let cfg: FlagguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config and evaluation context used by the engine
/// (profiles + overrides + per-check config).
pub fn resolve_config(
    cfg: FlagguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
