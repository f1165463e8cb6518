// Library exports for testing
// The binary (main.rs) imports these as well

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod report;
pub mod settings;

#[cfg(test)]
mod tests;
