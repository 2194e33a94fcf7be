//! Conversational agents: who they are, what they say offline, and the remote model

pub mod fallback;
pub mod remote;
pub mod roster;

pub use fallback::scripted_reply;
pub use remote::{AgentError, RemoteAgent};
pub use roster::{AgentId, AgentProfile, Presence, Roster, TeamStats, Teammate};
