use serde::Serialize;

/// A single decoded sensor reading.
///
/// Field names serialize in camelCase because downstream consumers key off
/// the exact names the network-server payload formatter emits
/// (`batteryVoltage`, `batteryPercentage`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedMeasurement {
    /// Preamble byte, passed through verbatim.
    pub preamble: u8,
    /// Status byte, passed through verbatim.
    pub status: u8,
    /// Temperature in °C, 0.01 °C resolution.
    pub temperature: f64,
    /// Relative humidity in %, 0.01 % resolution.
    pub humidity: f64,
    /// Pressure in hPa, 0.01 hPa resolution, offset-corrected.
    pub pressure: f64,
    /// Battery voltage in V, 0.01 V resolution.
    pub battery_voltage: f64,
    /// CRC-8 byte from the frame, extracted but not verified.
    pub crc8le: u8,
    /// Estimated battery charge, always within 0..=100.
    pub battery_percentage: u8,
}

/// Decode result in the uplink document shape: the measurement on success,
/// error messages on failure, plus a warnings list that this decoder never
/// populates but downstream consumers already expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedUplink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DecodedMeasurement>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DecodedMeasurement {
        DecodedMeasurement {
            preamble: 0x5A,
            status: 0x01,
            temperature: 21.73,
            humidity: 45.2,
            pressure: 1013.25,
            battery_voltage: 3.5,
            crc8le: 0xAB,
            battery_percentage: 63,
        }
    }

    #[test]
    fn measurement_serializes_with_wire_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();

        for key in [
            "preamble",
            "status",
            "temperature",
            "humidity",
            "pressure",
            "batteryVoltage",
            "crc8le",
            "batteryPercentage",
        ] {
            assert!(obj.contains_key(key), "missing wire field {key}");
        }
        assert_eq!(obj.len(), 8);
    }

    #[test]
    fn failed_uplink_omits_data_field() {
        let uplink = DecodedUplink {
            data: None,
            warnings: Vec::new(),
            errors: vec!["insufficient bytes: need at least 10, got 3".to_string()],
        };
        let json = serde_json::to_value(&uplink).unwrap();
        let obj = json.as_object().unwrap();

        assert!(!obj.contains_key("data"));
        assert_eq!(json["warnings"].as_array().unwrap().len(), 0);
        assert_eq!(json["errors"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn successful_uplink_keeps_empty_warnings_and_errors() {
        let uplink = DecodedUplink {
            data: Some(sample()),
            warnings: Vec::new(),
            errors: Vec::new(),
        };
        let json = serde_json::to_value(&uplink).unwrap();

        assert_eq!(json["data"]["batteryVoltage"], 3.5);
        assert_eq!(json["warnings"].as_array().unwrap().len(), 0);
        assert_eq!(json["errors"].as_array().unwrap().len(), 0);
    }
}
