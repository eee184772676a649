//! Typed configuration sections and their literal defaults.
//!
//! The document persisted at `~/.eadnets/config.json` has five top-level
//! keys.  Each mapping section is a struct here; `esp_devices` is an ordered
//! list whose record shape the control plane does not interpret.
//!
//! ```json
//! {
//!   "server":        { "host": "0.0.0.0", "port": 8080, "debug": false },
//!   "cloudflare":    { "tunnel_name": "ead-net-tunnel", "domain": "eadnets.com",
//!                      "tunnel_id": null, "credentials_file": null },
//!   "network":       { "interface": "utun5", "subnet": "192.168.100.0/24",
//!                      "ip_address": "192.168.100.1" },
//!   "homeassistant": { "config_path": "~/homeassistant_config", "port": 8123,
//!                      "ssl": false },
//!   "esp_devices":   []
//! }
//! ```
//!
//! # Serde default values
//!
//! Every field carries `#[serde(default = "...")]` so that a section
//! deserialized on its own (for example from a request body) is always
//! complete.  The store does not rely on this for reads; it goes through the
//! explicit merge in [`super::merge`] instead.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level section keys, in the order they are serialized.
pub const SECTION_KEYS: [&str; 5] = [
    "server",
    "cloudflare",
    "network",
    "homeassistant",
    "esp_devices",
];

// ── Config schema types ───────────────────────────────────────────────────────

/// The full configuration document returned to every caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cloudflare: CloudflareConfig,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub homeassistant: HomeAssistantConfig,
    /// Opaque device records, kept in the order they were saved.
    #[serde(default)]
    pub esp_devices: Vec<Value>,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Address the listener binds to.  `"0.0.0.0"` binds all interfaces.
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Raises the default log level to `debug`.
    #[serde(default)]
    pub debug: bool,
}

/// Cloudflare tunnel identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CloudflareConfig {
    /// Name passed to `cloudflared tunnel run|create`.
    #[serde(default = "default_tunnel_name")]
    pub tunnel_name: String,
    #[serde(default = "default_domain")]
    pub domain: String,
    /// Assigned by Cloudflare once the tunnel has been created.
    #[serde(default)]
    pub tunnel_id: Option<String>,
    #[serde(default)]
    pub credentials_file: Option<String>,
}

/// The appliance's routed network interface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkConfig {
    /// Interface inspected by `ifconfig` (e.g. `utun5`).
    #[serde(default = "default_interface")]
    pub interface: String,
    #[serde(default = "default_subnet")]
    pub subnet: String,
    #[serde(default = "default_ip_address")]
    pub ip_address: String,
}

/// Local HomeAssistant installation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HomeAssistantConfig {
    #[serde(default = "default_ha_config_path")]
    pub config_path: String,
    #[serde(default = "default_ha_port")]
    pub port: u16,
    #[serde(default)]
    pub ssl: bool,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_server_port() -> u16 {
    8080
}
fn default_tunnel_name() -> String {
    "ead-net-tunnel".to_string()
}
fn default_domain() -> String {
    "eadnets.com".to_string()
}
fn default_interface() -> String {
    "utun5".to_string()
}
fn default_subnet() -> String {
    "192.168.100.0/24".to_string()
}
fn default_ip_address() -> String {
    "192.168.100.1".to_string()
}
fn default_ha_config_path() -> String {
    "~/homeassistant_config".to_string()
}
fn default_ha_port() -> u16 {
    8123
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            cloudflare: CloudflareConfig::default(),
            network: NetworkConfig::default(),
            homeassistant: HomeAssistantConfig::default(),
            esp_devices: Vec::new(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_server_port(),
            debug: false,
        }
    }
}

impl Default for CloudflareConfig {
    fn default() -> Self {
        Self {
            tunnel_name: default_tunnel_name(),
            domain: default_domain(),
            tunnel_id: None,
            credentials_file: None,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            interface: default_interface(),
            subnet: default_subnet(),
            ip_address: default_ip_address(),
        }
    }
}

impl Default for HomeAssistantConfig {
    fn default() -> Self {
        Self {
            config_path: default_ha_config_path(),
            port: default_ha_port(),
            ssl: false,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
