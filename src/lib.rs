//! Interactive linear regression playground.
//!
//! A synthetic noisy dataset is fitted by hand: the user moves the intercept
//! and slope, and the chart and mean squared error follow.

pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod model;
pub mod plots;
pub mod presentation;
pub mod problem;
pub mod ui;

pub use error::{PlaygroundError, Result};
