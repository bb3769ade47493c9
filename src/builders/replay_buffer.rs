use crate::error::{PodError, Result};
use crate::replay_buffer::ReplayBuffer;

/// Builder for ReplayBuffer
#[derive(Debug, Default)]
pub struct ReplayBufferBuilder {
    capacity: Option<usize>,
    seed: Option<u64>,
}

impl ReplayBufferBuilder {
    /// Create a new replay buffer builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capacity
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Seed the sampling RNG
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the replay buffer
    pub fn build(self) -> Result<ReplayBuffer> {
        let capacity = self.capacity.ok_or_else(|| {
            PodError::invalid_parameter("capacity", "Capacity not specified")
        })?;

        if capacity == 0 {
            return Err(PodError::invalid_parameter(
                "capacity",
                "Capacity must be greater than 0",
            ));
        }

        Ok(match self.seed {
            Some(seed) => ReplayBuffer::with_seed(capacity, seed),
            None => ReplayBuffer::new(capacity),
        })
    }
}
