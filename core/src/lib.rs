#![no_std]

extern crate alloc;

pub use cell::*;
pub use clock::*;
pub use config::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use snapshot::*;
pub use types::*;

mod cell;
mod clock;
mod config;
mod error;
mod generator;
mod session;
mod snapshot;
mod types;
