use ndarray::Array1;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;
use std::collections::VecDeque;

use crate::error::{PodError, Result};

/// One stored transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Experience {
    pub state: Array1<f32>,
    pub action: Array1<f32>,
    pub reward: f32,
    pub next_state: Array1<f32>,
}

/// A batch drawn from the buffer. The four sequences are parallel: entry `j`
/// of each comes from the same stored experience, namely `indices[j]`.
#[derive(Clone, Debug)]
pub struct SampledBatch {
    pub states: Vec<Array1<f32>>,
    pub actions: Vec<Array1<f32>>,
    pub rewards: Array1<f32>,
    pub next_states: Vec<Array1<f32>>,
    pub indices: Vec<usize>,
}

impl SampledBatch {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Fixed-capacity FIFO experience store with uniform sampling without
/// replacement.
#[derive(Clone, Debug)]
pub struct ReplayBuffer {
    buffer: VecDeque<Experience>,
    capacity: usize,
    rng: StdRng,
}

impl ReplayBuffer {
    pub fn new(capacity: usize) -> Self {
        Self::with_rng(capacity, StdRng::from_entropy())
    }

    pub fn with_seed(capacity: usize, seed: u64) -> Self {
        Self::with_rng(capacity, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(capacity: usize, rng: StdRng) -> Self {
        ReplayBuffer {
            buffer: VecDeque::with_capacity(capacity + 1),
            capacity,
            rng,
        }
    }

    /// Append an experience, evicting the oldest one once over capacity.
    pub fn add(&mut self, experience: Experience) {
        self.buffer.push_back(experience);
        if self.buffer.len() > self.capacity {
            self.buffer.pop_front();
        }
    }

    pub fn add_experience(
        &mut self,
        state: Array1<f32>,
        action: Array1<f32>,
        reward: f32,
        next_state: Array1<f32>,
    ) {
        self.add(Experience {
            state,
            action,
            reward,
            next_state,
        });
    }

    /// Draw `batch_size` distinct indices uniformly at random.
    pub fn sample_indices(&mut self, batch_size: usize) -> Result<Vec<usize>> {
        if batch_size > self.buffer.len() {
            return Err(PodError::InsufficientSamples {
                requested: batch_size,
                available: self.buffer.len(),
            });
        }
        Ok(index::sample(&mut self.rng, self.buffer.len(), batch_size).into_vec())
    }

    /// Sample distinct experiences by reference.
    pub fn sample(&mut self, batch_size: usize) -> Result<Vec<&Experience>> {
        let indices = self.sample_indices(batch_size)?;
        Ok(indices.into_iter().map(|i| &self.buffer[i]).collect())
    }

    /// Sample distinct experiences and split them into parallel sequences.
    pub fn sample_batch(&mut self, batch_size: usize) -> Result<SampledBatch> {
        let indices = self.sample_indices(batch_size)?;

        let mut states = Vec::with_capacity(batch_size);
        let mut actions = Vec::with_capacity(batch_size);
        let mut rewards = Array1::zeros(batch_size);
        let mut next_states = Vec::with_capacity(batch_size);
        for (slot, &i) in indices.iter().enumerate() {
            let experience = &self.buffer[i];
            states.push(experience.state.clone());
            actions.push(experience.action.clone());
            rewards[slot] = experience.reward;
            next_states.push(experience.next_state.clone());
        }

        Ok(SampledBatch {
            states,
            actions,
            rewards,
            next_states,
            indices,
        })
    }

    /// Experiences from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Experience> {
        self.buffer.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Experience> {
        self.buffer.get(index)
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buffer.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
