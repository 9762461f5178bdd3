//! Configuration and entry-point plumbing for the movements node.

mod config;
mod error;
pub mod utils;

pub use crate::{config::*, error::*};
