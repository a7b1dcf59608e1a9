//! Command handling for the serial packet link.
//!
//! [`Controller`] is the device side main loop: each [`poll`] services the
//! link, dispatches at most one received [`Command`], then runs the LED
//! blinker without ever blocking.
//!
//! | byte  | command                   |
//! |-------|---------------------------|
//! | `'r'` | echo the packet back      |
//! | `'b'` | start blinking the LED    |
//! | `'o'` | stop blinking the LED     |
//!
//! [`poll`]: Controller::poll

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod log;

pub mod blink;
pub mod command;
pub mod config;
pub mod controller;
pub mod dispatcher;

pub use blink::Blinker;
pub use command::Command;
pub use config::Config;
pub use controller::{Controller, Error};
pub use dispatcher::{Dispatcher, Mode};
