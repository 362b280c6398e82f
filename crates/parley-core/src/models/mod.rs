//! Metadata models shared with the host.

pub mod parameter;

pub use parameter::ParameterSpec;
