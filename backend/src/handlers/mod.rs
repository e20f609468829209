// src/handlers/mod.rs

pub mod progress;
pub mod quiz;
pub mod score;
