// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host configuration loaded from environment variables.

use parabuild_geometry::TessellationOptions;

const DEFAULT_LOG_FILTER: &str = "info,parabuild_core=debug";

/// Host configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// `tracing` filter directive.
    pub log_filter: String,
    /// Sphere resolution for OBJ output.
    pub tessellation: TessellationOptions,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = TessellationOptions::default();

        Self {
            log_filter: lookup("PARABUILD_LOG")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.into()),
            tessellation: TessellationOptions {
                sphere_stacks: lookup("PARABUILD_SPHERE_STACKS")
                    .and_then(|v| v.parse().ok())
                    .filter(|v| *v >= 2)
                    .unwrap_or(defaults.sphere_stacks),
                sphere_sectors: lookup("PARABUILD_SPHERE_SECTORS")
                    .and_then(|v| v.parse().ok())
                    .filter(|v| *v >= 3)
                    .unwrap_or(defaults.sphere_sectors),
            },
        }
    }
}
