//! Movement targets derived from images, published over ROS1.
//!
//! A [`MovementFromImage`] turns the curve drawn in an image into a sequence
//! of normalized targets; a [`MovementPublisher`] replays registered
//! movements on the node-private `targets` topic at a fixed rate, scaled into
//! a configured range.

#![warn(rust_2018_idioms)]

mod error;
mod movement;
mod movement_from_image;
mod movement_publisher;
mod mse;
mod ros_target_sink;

// re-export
pub use rosrust::{init, is_ok, rate};

pub use crate::{
    error::Error, movement::*, movement_from_image::*, movement_publisher::*, mse::*,
    ros_target_sink::*,
};
