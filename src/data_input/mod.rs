// src/data_input/mod.rs

pub mod input_spec;
pub mod telemetry_event;
pub mod telemetry_parser;

// src/data_input/mod.rs
