#![cfg_attr(not(test), no_std)]

mod error;

pub mod config;
pub mod decoder;
pub mod device;
pub mod interface;
pub mod log;
pub mod params;
pub mod registers;
pub mod sensor;
pub mod transaction;

pub use crate::config::Config;
pub use crate::decoder::AccelerationSample;
pub use crate::device::{Lis3dsh, State};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::params::Range;
pub use crate::sensor::Sensor;
