//! Packet endpoint for a serial link.
//!
//! An [`Endpoint`] sits on top of a [`Framing`] layer (COBS by default, see
//! [`CobsFraming`]) and exposes the packet level operations:
//!
//! - [`Endpoint::update`] services the framing layer and stages at most one
//!   decoded frame,
//! - [`Endpoint::read_packet`] drains and validates the staged frame,
//! - [`Endpoint::send_packet`] serializes and transmits a packet.
//!
//! Everything runs on the caller's thread; nothing blocks.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod log;

pub mod config;
pub mod endpoint;
pub mod framing;
pub mod staging;

pub use config::LinkConfig;
pub use endpoint::{Endpoint, Error};
pub use framing::{CobsFraming, Framing};
pub use staging::StagingBuffer;

pub use serial_packet::{self as packet, Packet};
