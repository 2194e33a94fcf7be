// Library crate: the headless office (scene persistence, agents, command protocol).
// The CLI in main.rs is a thin driver over these modules.

pub mod agent;
pub mod command;
pub mod fixtures;
pub mod harness;
pub mod state;
