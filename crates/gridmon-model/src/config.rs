use serde::{Deserialize, Serialize};

use crate::domain::{DEFAULT_HOSTNAME, DEFAULT_RPC_PORT};

/// Monitor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    /// Display name of the monitor application.
    pub app_name: String,
    /// Display name of the grid the monitor attaches to.
    pub grid_name: String,
    /// Hostname used when an endpoint does not name one.
    pub default_hostname: String,
    /// Control port used when an endpoint does not name one.
    pub default_port: String,
    /// Home URL of the project, if the deployment has one.
    pub project_url: String,
    /// Monitor version as `[major, minor, release]`.
    pub version: [u16; 3],
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            app_name: "Grid Monitor".to_string(),
            grid_name: "Computing Grid".to_string(),
            default_hostname: DEFAULT_HOSTNAME.to_string(),
            default_port: DEFAULT_RPC_PORT.to_string(),
            project_url: String::new(),
            version: [0, 1, 4],
        }
    }
}

impl GridConfig {
    /// Dotted version string, e.g. `0.1.4`.
    pub fn version_string(&self) -> String {
        let [major, minor, release] = self.version;
        format!("{major}.{minor}.{release}")
    }
}
