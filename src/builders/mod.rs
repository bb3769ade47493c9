pub mod agent;
pub mod replay_buffer;

pub use agent::AgentBuilder;
pub use replay_buffer::ReplayBufferBuilder;
