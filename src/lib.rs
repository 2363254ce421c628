//! Controller for the Rockchip EBC e-paper display driver parameters.
//!
//! [`ebc::Driver`] maps normalized settings, as handled by sliders and
//! toggles, to the raw module parameters exposed by the kernel driver and
//! to the warm backlight class.

pub mod cli;
pub mod config;
pub mod ebc;

pub const APP_NAME: &str = "ebc-controller";
