use ndarray::{array, Array1};
use std::collections::HashSet;

use crate::error::PodError;
use crate::replay_buffer::{Experience, ReplayBuffer};

fn tagged(i: usize) -> Experience {
    let v = i as f32;
    Experience {
        state: array![v, -v],
        action: array![v * 10.0],
        reward: v,
        next_state: array![v + 0.5, -v - 0.5],
    }
}

fn filled(capacity: usize, count: usize, seed: u64) -> ReplayBuffer {
    let mut buffer = ReplayBuffer::with_seed(capacity, seed);
    for i in 0..count {
        buffer.add(tagged(i));
    }
    buffer
}

#[test]
fn test_replay_buffer_add_and_sample() {
    let mut buffer = ReplayBuffer::new(10);
    buffer.add_experience(array![0.5, -0.5], array![0.1, 0.2, 0.3], 1.0, array![0.6, -0.4]);
    assert_eq!(buffer.len(), 1);

    let batch = buffer.sample_batch(1).unwrap();
    assert_eq!(batch.states, vec![array![0.5, -0.5]]);
    assert_eq!(batch.actions, vec![array![0.1, 0.2, 0.3]]);
    assert_eq!(batch.rewards, array![1.0]);
    assert_eq!(batch.next_states, vec![array![0.6, -0.4]]);
}

#[test]
fn test_replay_buffer_fifo_eviction() {
    let mut buffer = filled(3, 3, 0);
    assert!(buffer.is_full());
    let sentinel = tagged(0);
    assert_eq!(buffer.get(0), Some(&sentinel));

    buffer.add(tagged(3));

    assert_eq!(buffer.len(), 3);
    assert!(buffer.iter().all(|e| *e != sentinel));
    let rewards: Vec<f32> = buffer.iter().map(|e| e.reward).collect();
    assert_eq!(rewards, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_replay_buffer_is_empty() {
    let mut buffer = ReplayBuffer::new(2);
    assert!(buffer.is_empty());
    assert!(!buffer.is_full());
    buffer.add(tagged(1));
    assert!(!buffer.is_empty());
}

#[test]
fn test_sample_more_than_stored_fails() {
    let mut buffer = filled(10, 4, 0);
    let result = buffer.sample_batch(5);
    assert_eq!(
        result.unwrap_err(),
        PodError::InsufficientSamples {
            requested: 5,
            available: 4
        }
    );
    assert!(buffer.sample(5).is_err());
}

#[test]
fn test_sample_batch_distinct_and_consistent() {
    let mut buffer = filled(20, 20, 5);
    for _ in 0..10 {
        let batch = buffer.sample_batch(8).unwrap();
        assert_eq!(batch.len(), 8);

        let unique: HashSet<usize> = batch.indices.iter().copied().collect();
        assert_eq!(unique.len(), 8);

        for j in 0..batch.len() {
            let expected = tagged(batch.indices[j]);
            assert_eq!(batch.states[j], expected.state);
            assert_eq!(batch.actions[j], expected.action);
            assert_eq!(batch.rewards[j], expected.reward);
            assert_eq!(batch.next_states[j], expected.next_state);
        }
    }
}

#[test]
fn test_full_batch_is_permutation() {
    let mut buffer = filled(6, 6, 2);
    let batch = buffer.sample_batch(6).unwrap();
    let mut rewards = batch.rewards.to_vec();
    rewards.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(rewards, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn test_seeded_sampling_is_reproducible() {
    let mut a = filled(50, 50, 17);
    let mut b = filled(50, 50, 17);
    for _ in 0..5 {
        assert_eq!(a.sample_indices(10).unwrap(), b.sample_indices(10).unwrap());
    }
}

#[test]
fn test_sample_returns_references() {
    let mut buffer = filled(5, 5, 1);
    let sample = buffer.sample(2).unwrap();
    assert_eq!(sample.len(), 2);
    assert_ne!(sample[0], sample[1]);
    let empty: Vec<Array1<f32>> = buffer.sample_batch(0).unwrap().states;
    assert!(empty.is_empty());
}
