//! Decoder for the 10-byte uplink frame emitted by a BME280-based LoRaWAN
//! sensor node.
//!
//! The node transmits a fixed-layout little-endian frame: preamble and status
//! bytes, temperature / humidity / pressure as scaled 16-bit words, a battery
//! byte and a trailing CRC-8. [`decode`] turns such a frame into a
//! [`DecodedMeasurement`]; [`decode_uplink`] wraps it in the
//! `{ data, warnings, errors }` document shape that network-server payload
//! formatters use. Both are pure functions with no state, safe to call from
//! any number of threads.

pub mod decoder;
pub mod error;
pub mod models;

pub use decoder::{decode, decode_uplink, FRAME_LEN, FRAME_PREAMBLE};
pub use error::DecodeError;
pub use models::{DecodedMeasurement, DecodedUplink};
