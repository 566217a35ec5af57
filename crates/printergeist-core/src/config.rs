// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PrintergeistError, Result};

const CONFIG_FILE: &str = "config.json";

/// Default CUPS port.
pub const DEFAULT_CUPS_PORT: u16 = 631;

/// User settings, read from `config.json` in the config directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CUPS server the spooler client talks to.
    pub server_uri: String,
    /// `requesting-user-name` for submitted jobs (falls back to `$USER`).
    pub requesting_user: Option<String>,
    /// Pause after a successful submission, in milliseconds.
    pub submit_delay_ms: u64,
    /// Echo the printer dump to stdout once the completion dialog closes.
    pub echo_printer_dump: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_uri: format!("ipp://localhost:{DEFAULT_CUPS_PORT}"),
            requesting_user: None,
            submit_delay_ms: 2000,
            echo_printer_dump: true,
        }
    }
}

impl AppConfig {
    /// Load the config file if present, then apply environment overrides.
    ///
    /// A broken config file is logged and replaced by defaults.
    pub fn load() -> Self {
        let mut config = match Self::load_from(&config_dir()) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                warn!(error = %e, "ignoring unreadable config file");
                Self::default()
            }
        };
        config.apply_cups_server(std::env::var("CUPS_SERVER").ok().as_deref());
        config
    }

    /// Read `config.json` from `dir`. `Ok(None)` when the file does not exist.
    pub fn load_from(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILE);
        let data = match std::fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PrintergeistError::Io(e)),
        };
        let config = serde_json::from_str(&data)
            .map_err(|e| PrintergeistError::Config(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "loaded config");
        Ok(Some(config))
    }

    /// Point `server_uri` at a `CUPS_SERVER` style value (`host` or `host:port`).
    ///
    /// Domain socket paths cannot be reached over IPP and are ignored.
    pub fn apply_cups_server(&mut self, value: Option<&str>) {
        let Some(server) = value.map(str::trim).filter(|s| !s.is_empty()) else {
            return;
        };
        if server.starts_with('/') {
            debug!(server, "CUPS_SERVER is a domain socket, keeping {}", self.server_uri);
            return;
        }
        self.server_uri = if server.contains(':') {
            format!("ipp://{server}")
        } else {
            format!("ipp://{server}:{DEFAULT_CUPS_PORT}")
        };
    }

    /// Effective `requesting-user-name`.
    pub fn user_name(&self) -> String {
        self.requesting_user
            .clone()
            .or_else(|| std::env::var("USER").ok())
            .unwrap_or_else(|| "anonymous".into())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

/// Directory holding `config.json`.
pub fn config_dir() -> PathBuf {
    config_base().join("printergeist")
}

fn config_base() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config");
    }
    // Last resort
    PathBuf::from("/tmp")
}
