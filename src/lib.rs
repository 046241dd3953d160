//! Slide carousel: rotates a set of slides on a timer or on user navigation.
//!
//! The carousel is written against two seams, an [`ElementTree`] it reads and
//! marks, and a [`Scheduler`] that drives its auto-rotation. The browser
//! backend lives behind the `web` feature; the desktop viewer binary behind
//! `desktop`.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod timer;
pub mod tree;

#[cfg(feature = "web")]
pub mod web;

pub use carousel::{normalize_index, Carousel};
pub use config::CarouselConfig;
pub use error::ConfigError;
pub use timer::{FrameClock, Scheduler, TimerId};
pub use tree::{ElementTree, Scene};
