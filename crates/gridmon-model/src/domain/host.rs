use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::domain::constants::{DEFAULT_HOSTNAME, DEFAULT_RPC_PORT};

/// One reachable grid client endpoint, as kept in the host list.
///
/// All three fields are plain strings: the port stays exactly as the user
/// entered it (an empty port is only fixed up at render time), and the
/// auth hash is whatever the login digest produced, possibly empty for
/// hosts that never authenticated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostEndpoint {
    hostname: String,
    port: String,
    auth_hash: String,
}

impl Default for HostEndpoint {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            port: DEFAULT_RPC_PORT.to_string(),
            auth_hash: String::new(),
        }
    }
}

impl HostEndpoint {
    /// Create an endpoint from its parts.
    pub fn new<H, P, A>(hostname: H, port: P, auth_hash: A) -> Self
    where
        H: Into<String>,
        P: Into<String>,
        A: Into<String>,
    {
        Self {
            hostname: hostname.into(),
            port: port.into(),
            auth_hash: auth_hash.into(),
        }
    }

    /// Get the hostname.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Replace the hostname.
    pub fn set_hostname<S: Into<String>>(&mut self, hostname: S) {
        self.hostname = hostname.into();
    }

    /// Get the port.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Replace the port.
    pub fn set_port<S: Into<String>>(&mut self, port: S) {
        self.port = port.into();
    }

    /// Get the stored auth hash.
    pub fn auth_hash(&self) -> &str {
        &self.auth_hash
    }

    /// Replace the stored auth hash.
    pub fn set_auth_hash<S: Into<String>>(&mut self, auth_hash: S) {
        self.auth_hash = auth_hash.into();
    }

    /// Render as `hostname:port`.
    ///
    /// An empty port is first replaced with [`DEFAULT_RPC_PORT`] and kept
    /// that way; host-list code relies on the stored endpoint being
    /// complete after the first render.
    pub fn render(&mut self) -> String {
        if self.port.is_empty() {
            self.port = DEFAULT_RPC_PORT.to_string();
        }
        format!("{}:{}", self.hostname, self.port)
    }

    /// Returns `true` when the stored hostname names `addr`, either as
    /// the literal address or as its reverse-resolved name.
    ///
    /// An endpoint without a hostname matches nothing.
    pub fn matches(&self, addr: &ResolvedAddr) -> bool {
        if self.hostname.is_empty() {
            return false;
        }
        let literal = addr.ip().to_string();
        let resolved = addr.hostname().unwrap_or(literal.as_str());
        self.hostname == literal || self.hostname == resolved
    }
}

/// A network address after resolution: the literal IP plus the
/// reverse-DNS name, when one exists.
///
/// Produced outside this crate (the lookup does I/O); comparing against
/// it is pure. A missing reverse name falls back to the literal address,
/// the way resolver APIs have always reported it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddr {
    ip: IpAddr,
    hostname: Option<String>,
}

impl ResolvedAddr {
    /// Address with no reverse name.
    pub fn new(ip: IpAddr) -> Self {
        Self { ip, hostname: None }
    }

    /// Address with a reverse-resolved name.
    pub fn with_hostname<S: Into<String>>(ip: IpAddr, hostname: S) -> Self {
        Self {
            ip,
            hostname: Some(hostname.into()),
        }
    }

    /// The literal address.
    pub fn ip(&self) -> IpAddr {
        self.ip
    }

    /// The reverse-resolved name, if the lookup produced one.
    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }
}
