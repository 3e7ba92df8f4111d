mod utils;

use std::io::{self, BufRead};

use log::{debug, error, info, warn};

use bme280_lora_decoder::{decode_uplink, FRAME_PREAMBLE};
use utils::{format_measurement, parse_hex_frame};

/// Decode one hex-encoded frame and print the uplink JSON document.
///
/// Returns false when the input could not even be parsed as hex; a frame
/// that parses but fails to decode still produces a JSON document with its
/// errors list populated.
fn process_frame(input: &str) -> Result<bool, Box<dyn std::error::Error>> {
    let bytes = match parse_hex_frame(input) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Skipping unparseable frame '{}': {}", input.trim(), e);
            return Ok(false);
        }
    };

    let uplink = decode_uplink(&bytes);
    println!("{}", serde_json::to_string(&uplink)?);

    match &uplink.data {
        Some(measurement) => {
            if measurement.preamble != FRAME_PREAMBLE {
                debug!(
                    "Unexpected preamble 0x{:02X} (firmware sends 0x{:02X})",
                    measurement.preamble, FRAME_PREAMBLE
                );
            }
            info!("Decoded frame: {}", format_measurement(measurement));
        }
        None => {
            for message in &uplink.errors {
                error!("Failed to decode frame: {}", message);
            }
        }
    }

    Ok(true)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_secs()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut total = 0usize;
    let mut skipped = 0usize;

    if args.is_empty() {
        // No arguments: read one hex frame per stdin line
        info!("Reading hex frames from stdin, one per line");
        for line in io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            total += 1;
            if !process_frame(&line)? {
                skipped += 1;
            }
        }
    } else {
        for arg in &args {
            total += 1;
            if !process_frame(arg)? {
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!("Skipped {} of {} input frames", skipped, total);
    }

    Ok(())
}
