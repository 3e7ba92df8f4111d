//! Decoding of the BME280 node's uplink frame.

use crate::error::DecodeError;
use crate::models::{DecodedMeasurement, DecodedUplink};

/// Number of meaningful bytes in an uplink frame. Trailing bytes are ignored.
pub const FRAME_LEN: usize = 10;

/// Preamble byte the node firmware transmits. Informational only; frames
/// with a different preamble still decode.
pub const FRAME_PREAMBLE: u8 = 0x5A;

// Battery discharge curve endpoints: 100% at 4.1 V, 0% at 2.5 V
const BATTERY_FULL_VOLTS: f64 = 4.1;
const BATTERY_EMPTY_VOLTS: f64 = 2.5;

/// Decode a raw uplink frame into structured measurements.
///
/// The frame is a fixed little-endian layout of at least 10 bytes:
/// - Byte 0: Preamble
/// - Byte 1: Status
/// - Bytes 2-3: Temperature (signed 16-bit, 0.01 °C resolution)
/// - Bytes 4-5: Humidity (unsigned 16-bit, 0.01 % resolution)
/// - Bytes 6-7: Pressure (unsigned 16-bit, +80000 offset, 0.01 hPa resolution)
/// - Byte 8: Battery voltage ((200 + value) / 100 V)
/// - Byte 9: CRC-8 of the preceding bytes (extracted, not verified)
///
/// Every byte value is accepted in every position; the only failure mode is
/// a frame shorter than 10 bytes. The function is pure and reads nothing but
/// its input.
pub fn decode(bytes: &[u8]) -> Result<DecodedMeasurement, DecodeError> {
    if bytes.len() < FRAME_LEN {
        return Err(DecodeError::InsufficientBytes {
            needed: FRAME_LEN,
            got: bytes.len(),
        });
    }

    // Decode temperature: signed 16-bit little-endian, 0.01 °C steps
    let temperature = i16::from_le_bytes([bytes[2], bytes[3]]) as f64 / 100.0;

    // Decode humidity: unsigned 16-bit little-endian, 0.01 % steps
    let humidity = u16::from_le_bytes([bytes[4], bytes[5]]) as f64 / 100.0;

    // Decode pressure: unsigned 16-bit little-endian + 80000, convert to hPa
    let pressure = (u16::from_le_bytes([bytes[6], bytes[7]]) as f64 + 80000.0) / 100.0;

    // The node sends (millivolts - 2000) / 10 in a single byte
    let battery_voltage = (200.0 + bytes[8] as f64) / 100.0;

    Ok(DecodedMeasurement {
        preamble: bytes[0],
        status: bytes[1],
        temperature,
        humidity,
        pressure,
        battery_voltage,
        crc8le: bytes[9],
        battery_percentage: battery_percentage(battery_voltage),
    })
}

/// Decode a frame into the uplink document shape used by network-server
/// payload formatters: measurement data on success, error messages on
/// failure, warnings always empty.
pub fn decode_uplink(bytes: &[u8]) -> DecodedUplink {
    match decode(bytes) {
        Ok(data) => DecodedUplink {
            data: Some(data),
            warnings: Vec::new(),
            errors: Vec::new(),
        },
        Err(e) => DecodedUplink {
            data: None,
            warnings: Vec::new(),
            errors: vec![e.to_string()],
        },
    }
}

/// Estimate battery charge from the measured voltage.
///
/// The voltage is clamped to the 4.1 V full mark before the linear formula
/// is applied, and only the lower bound of the result is clamped afterwards.
/// At exactly 4.1 V the formula lands on 100, so the result never exceeds
/// 100 without an upper clamp. Rounding is half-away-from-zero.
fn battery_percentage(voltage: f64) -> u8 {
    let clamped = voltage.min(BATTERY_FULL_VOLTS);
    let percentage =
        ((clamped - BATTERY_EMPTY_VOLTS) / (BATTERY_FULL_VOLTS - BATTERY_EMPTY_VOLTS) * 100.0)
            .round();
    if percentage < 0.0 {
        0
    } else {
        percentage as u8
    }
}
