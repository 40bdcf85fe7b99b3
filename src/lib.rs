pub mod emit;
pub mod magic;

pub use emit::{EmitOptions, emit};
