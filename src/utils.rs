/// Helper functions for the command line frontend
use bme280_lora_decoder::DecodedMeasurement;

/// Parse a hex-encoded frame string into raw bytes.
///
/// Accepts an optional leading `0x` and tolerates space, colon and dash
/// separators between bytes, so `5A01...`, `0x5A01...` and `5A:01:...` all
/// work. Odd-length input and non-hex characters are rejected.
pub fn parse_hex_frame(input: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let trimmed = input.trim();
    let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);

    // Validate up front so the pair slicing below only ever sees ASCII hex
    let mut digits = String::with_capacity(stripped.len());
    for c in stripped.chars() {
        match c {
            ' ' | ':' | '-' => continue,
            c if c.is_ascii_hexdigit() => digits.push(c),
            c => return Err(format!("invalid hex character '{}'", c).into()),
        }
    }

    if digits.is_empty() {
        return Err("empty frame".into());
    }
    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits ({})", digits.len()).into());
    }

    let mut bytes = Vec::with_capacity(digits.len() / 2);
    for i in (0..digits.len()).step_by(2) {
        let pair = &digits[i..i + 2];
        let byte = u8::from_str_radix(pair, 16)
            .map_err(|_| format!("invalid hex byte '{}'", pair))?;
        bytes.push(byte);
    }

    Ok(bytes)
}

/// Format a measurement for a one-line log summary.
pub fn format_measurement(m: &DecodedMeasurement) -> String {
    format!(
        "temp={:.2}°C, humidity={:.2}%, pressure={:.2} hPa, battery={:.2} V ({}%)",
        m.temperature, m.humidity, m.pressure, m.battery_voltage, m.battery_percentage
    )
}
