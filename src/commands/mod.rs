pub mod batch;
pub mod generate;
pub mod utils;
pub mod version;

#[cfg(test)]
#[path = "../commands_test.rs"]
mod commands_test;
