//! Length-prefixed, CRC-16 checked packets for small serial links.
//!
//! A packet is a command byte and up to 251 payload bytes. On the wire
//! (after the framing layer strips its own delimiting) it is laid out as:
//!
//! ```text
//! ┌─────────┬────────┬─────────────┬──────────────┐
//! │ COMMAND │ LENGTH │ PAYLOAD     │ CRC16 (BE)   │
//! │ 1B      │ 1B     │ 0–251B      │ 2B           │
//! └─────────┴────────┴─────────────┴──────────────┘
//! ```
//!
//! The checksum is the reflected CRC-16-CCITT ([`crc::crc16_lsb`]) over
//! command, length and payload.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod crc;
pub mod frame;
pub mod packet;

pub use crc::{crc16_lsb, crc16_msb, CRCProvider, Crc16Lsb, Crc16Msb};
pub use frame::{Frame, FRAME_CAPACITY, FRAME_OVERHEAD, MAX_PAYLOAD_LEN, MAX_SEND_PAYLOAD_LEN};
pub use packet::{parse, serialize, serialize_into, Error, Packet};
