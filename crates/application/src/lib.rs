//! Guess and Win application layer: ports and retention use cases
pub mod ports;
pub mod use_cases;
