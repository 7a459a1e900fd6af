pub mod clock;
pub mod combo;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod input;
pub mod ledger;
pub mod scoring;
pub mod sim;
pub mod stats;
pub mod trace;
pub mod types;
// cmd and reports are binary modules (in main.rs or distinct files),
// but if you want to test them, they might need to be pub here.
// For this refactor, they are modules of the binary crate (main).
