#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod installer;
pub mod registry;
pub mod scaffold;
