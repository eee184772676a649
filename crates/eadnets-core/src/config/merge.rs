//! Explicit field-by-field overlay of on-disk JSON onto the defaults.
//!
//! The merge is **shallow per top-level key**:
//!
//! | On-disk value for a section | Result                                   |
//! |-----------------------------|------------------------------------------|
//! | absent                      | defaults used verbatim                   |
//! | JSON object                 | each known field overwrites its default  |
//! | anything else               | warning logged, defaults used verbatim   |
//!
//! `esp_devices` is a list, not a mapping, so it is replaced wholesale when
//! the on-disk value is an array.
//!
//! Fields are overlaid one at a time by deserializing the on-disk value into
//! the field's own Rust type.  A value of the wrong type (say
//! `"port": "eighty"`) is logged and the default kept, so one bad field can
//! never take the rest of its section down with it.  Keys the schema does not
//! know, at either level, are skipped.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::schema::{AppConfig, SECTION_KEYS};

/// Lays `disk` over [`AppConfig::default()`] and returns the complete result.
///
/// Never fails: every problem with the on-disk content is logged and the
/// affected field or section falls back to its default.
///
/// # Example
///
/// ```rust
/// use eadnets_core::merge_over_defaults;
///
/// let disk = serde_json::json!({ "network": { "interface": "en0" } });
/// let cfg = merge_over_defaults(disk.as_object().unwrap());
/// assert_eq!(cfg.network.interface, "en0");
/// assert_eq!(cfg.network.subnet, "192.168.100.0/24");
/// ```
pub fn merge_over_defaults(disk: &Map<String, Value>) -> AppConfig {
    let mut cfg = AppConfig::default();

    for key in disk.keys() {
        if !SECTION_KEYS.contains(&key.as_str()) {
            debug!(key = %key, "ignoring unknown top-level config key");
        }
    }

    if let Some(section) = section(disk, "server") {
        overlay(&mut cfg.server.host, section, "server", "host");
        overlay(&mut cfg.server.port, section, "server", "port");
        overlay(&mut cfg.server.debug, section, "server", "debug");
    }

    if let Some(section) = section(disk, "cloudflare") {
        overlay(&mut cfg.cloudflare.tunnel_name, section, "cloudflare", "tunnel_name");
        overlay(&mut cfg.cloudflare.domain, section, "cloudflare", "domain");
        overlay(&mut cfg.cloudflare.tunnel_id, section, "cloudflare", "tunnel_id");
        overlay(
            &mut cfg.cloudflare.credentials_file,
            section,
            "cloudflare",
            "credentials_file",
        );
    }

    if let Some(section) = section(disk, "network") {
        overlay(&mut cfg.network.interface, section, "network", "interface");
        overlay(&mut cfg.network.subnet, section, "network", "subnet");
        overlay(&mut cfg.network.ip_address, section, "network", "ip_address");
    }

    if let Some(section) = section(disk, "homeassistant") {
        overlay(
            &mut cfg.homeassistant.config_path,
            section,
            "homeassistant",
            "config_path",
        );
        overlay(&mut cfg.homeassistant.port, section, "homeassistant", "port");
        overlay(&mut cfg.homeassistant.ssl, section, "homeassistant", "ssl");
    }

    match disk.get("esp_devices") {
        Some(Value::Array(devices)) => cfg.esp_devices = devices.clone(),
        Some(other) => warn!(
            found = json_type(other),
            "esp_devices is not a list; using defaults"
        ),
        None => {}
    }

    cfg
}

/// Returns the mapping stored under `key`, or `None` when it is absent or
/// not a JSON object.
fn section<'a>(disk: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    match disk.get(key)? {
        Value::Object(map) => Some(map),
        other => {
            warn!(
                section = key,
                found = json_type(other),
                "config section is not an object; using defaults"
            );
            None
        }
    }
}

/// Overwrites `target` with `section[field]` when that value deserializes
/// into `T`.  Leaves `target` untouched when the field is absent or has the
/// wrong type.
fn overlay<T: DeserializeOwned>(
    target: &mut T,
    section: &Map<String, Value>,
    section_name: &str,
    field: &str,
) {
    let Some(raw) = section.get(field) else {
        return;
    };

    match T::deserialize(raw) {
        Ok(value) => *target = value,
        Err(e) => warn!(
            section = section_name,
            field,
            error = %e,
            "config field has an unexpected type; keeping default"
        ),
    }
}

/// Name of the JSON type of `value`, for log and error messages.
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn merge(disk: Value) -> AppConfig {
        merge_over_defaults(disk.as_object().expect("test input must be an object"))
    }

    #[test]
    fn test_empty_document_yields_defaults() {
        assert_eq!(merge(json!({})), AppConfig::default());
    }

    #[test]
    fn test_single_nested_override_keeps_other_defaults() {
        // Arrange
        let disk = json!({ "network": { "interface": "en0" } });

        // Act
        let cfg = merge(disk);

        // Assert
        let mut expected = AppConfig::default();
        expected.network.interface = "en0".to_string();
        assert_eq!(cfg, expected);
    }

    #[test]
    fn test_unknown_top_level_key_is_ignored() {
        let cfg = merge(json!({ "firewall": { "enabled": true } }));
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_unknown_nested_key_is_ignored() {
        let cfg = merge(json!({ "server": { "port": 9090, "workers": 4 } }));
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.host, "0.0.0.0");
    }

    #[test]
    fn test_wrong_field_type_keeps_default_for_that_field_only() {
        // Arrange: port is a string, host is valid
        let disk = json!({ "server": { "port": "eighty", "host": "127.0.0.1" } });

        // Act
        let cfg = merge(disk);

        // Assert
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "127.0.0.1");
    }

    #[test]
    fn test_out_of_range_port_keeps_default() {
        let cfg = merge(json!({ "homeassistant": { "port": 70000 } }));
        assert_eq!(cfg.homeassistant.port, 8123);
    }

    #[test]
    fn test_non_object_section_uses_defaults() {
        let cfg = merge(json!({ "cloudflare": "ead-net-tunnel", "server": null }));
        assert_eq!(cfg.cloudflare, AppConfig::default().cloudflare);
        assert_eq!(cfg.server, AppConfig::default().server);
    }

    #[test]
    fn test_explicit_null_clears_optional_field() {
        // Arrange: tunnel_id set then explicitly nulled on disk
        let cfg = merge(json!({ "cloudflare": { "tunnel_id": null, "domain": "example.org" } }));

        // Assert
        assert_eq!(cfg.cloudflare.tunnel_id, None);
        assert_eq!(cfg.cloudflare.domain, "example.org");
    }

    #[test]
    fn test_optional_field_is_set_from_disk() {
        let cfg = merge(json!({ "cloudflare": { "tunnel_id": "6ff42ae2-765d" } }));
        assert_eq!(cfg.cloudflare.tunnel_id.as_deref(), Some("6ff42ae2-765d"));
        assert_eq!(cfg.cloudflare.tunnel_name, "ead-net-tunnel");
    }

    #[test]
    fn test_esp_devices_replaced_wholesale() {
        // Arrange
        let disk = json!({
            "esp_devices": [
                { "name": "porch", "ip": "192.168.100.20" },
                { "name": "garage" }
            ]
        });

        // Act
        let cfg = merge(disk);

        // Assert: order and record shape preserved as-is
        assert_eq!(cfg.esp_devices.len(), 2);
        assert_eq!(cfg.esp_devices[0]["name"], "porch");
        assert_eq!(cfg.esp_devices[1], json!({ "name": "garage" }));
    }

    #[test]
    fn test_esp_devices_non_list_keeps_default() {
        let cfg = merge(json!({ "esp_devices": { "porch": {} } }));
        assert!(cfg.esp_devices.is_empty());
    }

    #[test]
    fn test_all_sections_overridden() {
        // Arrange
        let disk = json!({
            "server": { "host": "127.0.0.1", "port": 9000, "debug": true },
            "cloudflare": {
                "tunnel_name": "home",
                "domain": "home.example",
                "tunnel_id": "abc",
                "credentials_file": "/etc/cloudflared/abc.json"
            },
            "network": { "interface": "wg0", "subnet": "10.0.0.0/24", "ip_address": "10.0.0.1" },
            "homeassistant": { "config_path": "/srv/ha", "port": 8443, "ssl": true },
            "esp_devices": [1, 2, 3]
        });

        // Act
        let cfg = merge(disk.clone());

        // Assert: the merged document serializes back to the on-disk input
        assert_eq!(serde_json::to_value(&cfg).expect("serialize"), disk);
    }
}
