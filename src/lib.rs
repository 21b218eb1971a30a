#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
#[cfg(feature = "std")]
mod client;
mod common;
mod config;
#[cfg(feature = "std")]
mod game;
#[cfg(feature = "std")]
mod logging;

pub use board::*;
#[cfg(feature = "std")]
pub use client::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, log_level};
