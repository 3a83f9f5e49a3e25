//! Command implementations for the Wellsketch CLI

pub mod inspect;
pub mod render;
pub mod sample;
