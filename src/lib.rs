// src/lib.rs

#[macro_use]
pub mod macros;

#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod data;
pub mod file;
pub mod gui;
pub mod pipeline;
pub mod progress;
pub mod rank;
pub mod screen;
pub mod store;
