//! Astrobotanica library crate — re-exports all modules for integration testing.
//!
//! The binary crate (`main.rs`) is the actual headless entry point.
//! This library crate exposes the same modules so that `tests/`
//! integration tests can import simulation types, systems, and resources.

pub mod shared;
pub mod clock;
pub mod data;
pub mod farm;
pub mod market;
pub mod economy;
pub mod progression;
pub mod npcs;
pub mod save;
