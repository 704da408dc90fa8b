// src/cli/mod.rs
pub mod args;
