//! Configured ESP devices.

use eadnets_core::AppConfig;

use crate::domain::EspStatusResponse;

/// `GET /api/esp/status`: the configured device records and their count.
pub fn esp_status(config: &AppConfig) -> EspStatusResponse {
    let devices = config.esp_devices.clone();
    let count = devices.len();
    EspStatusResponse {
        success: true,
        message: format!("Found {count} ESP devices"),
        devices,
        count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_devices_by_default() {
        let response = esp_status(&AppConfig::default());

        assert!(response.success);
        assert_eq!(response.message, "Found 0 ESP devices");
        assert!(response.devices.is_empty());
        assert_eq!(response.count, 0);
    }

    #[test]
    fn test_devices_are_returned_unchanged_in_order() {
        // Arrange
        let config = AppConfig {
            esp_devices: vec![
                json!({ "name": "porch", "ip": "192.168.100.20" }),
                json!("bare-string-record"),
            ],
            ..AppConfig::default()
        };

        // Act
        let response = esp_status(&config);

        // Assert
        assert_eq!(response.message, "Found 2 ESP devices");
        assert_eq!(response.count, 2);
        assert_eq!(response.devices, config.esp_devices);
    }
}
