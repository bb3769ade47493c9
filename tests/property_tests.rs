#[cfg(test)]
mod property_tests {
    use ndarray::Array1;
    use podracer::layers::{DenseLayer, Layer, LayerTag, TanhLayer};
    use podracer::network::Brain;
    use podracer::replay_buffer::{Experience, ReplayBuffer};
    use proptest::prelude::*;
    use std::collections::HashSet;

    // Strategy for generating layer structures containing at least one Dense
    fn structure_strategy() -> impl Strategy<Value = Vec<LayerTag>> {
        prop::collection::vec(
            prop_oneof![Just(LayerTag::Dense), Just(LayerTag::Tanh), Just(LayerTag::Linear)],
            0..8,
        )
        .prop_map(|mut tags| {
            tags.insert(0, LayerTag::Dense);
            tags
        })
    }

    fn experience(i: usize) -> Experience {
        let v = i as f32;
        Experience {
            state: Array1::from_elem(3, v),
            action: Array1::from_elem(2, -v),
            reward: v * 0.5,
            next_state: Array1::from_elem(3, v + 1.0),
        }
    }

    proptest! {
        #[test]
        fn test_dense_output_and_gradient_lengths(input_size in 1usize..20, output_size in 1usize..20) {
            let mut layer = DenseLayer::new(input_size, output_size);
            let output = layer.forward(Array1::ones(input_size).view()).unwrap();
            prop_assert_eq!(output.len(), output_size);

            let gradient = layer.backward(Array1::ones(output_size).view(), 0.01).unwrap();
            prop_assert_eq!(gradient.len(), input_size);
        }

        #[test]
        fn test_tanh_bounded_and_gradient_shrinks(
            input in prop::collection::vec(-5.0f32..5.0, 1..50),
            scale in -10.0f32..10.0
        ) {
            let mut layer = TanhLayer::new();
            let input = Array1::from_vec(input);
            let output = layer.forward(input.view()).unwrap();
            for &y in output.iter() {
                prop_assert!(y > -1.0 && y < 1.0, "tanh output out of bounds: {}", y);
            }

            let grad_out = Array1::from_elem(input.len(), scale);
            let grad_in = layer.backward(grad_out.view(), 0.1).unwrap();
            for (g_in, g_out) in grad_in.iter().zip(grad_out.iter()) {
                prop_assert!(g_in.abs() <= g_out.abs());
            }
        }

        #[test]
        fn test_network_dense_shapes_chain(
            structure in structure_strategy(),
            input_dim in 1usize..10,
            output_dim in 1usize..10,
            hidden_dim in 1usize..10
        ) {
            let dense_count = structure.iter().filter(|t| **t == LayerTag::Dense).count();
            let mut brain = Brain::new(input_dim, output_dim, hidden_dim, &structure, 0.01).unwrap();
            let shapes = brain.dense_shapes();

            prop_assert_eq!(shapes.len(), dense_count);
            prop_assert_eq!(shapes[0].0, input_dim);
            prop_assert_eq!(shapes[shapes.len() - 1].1, output_dim);
            for pair in shapes.windows(2) {
                prop_assert_eq!(pair[0].1, pair[1].0);
            }

            let output = brain.forward(Array1::ones(input_dim).view()).unwrap();
            prop_assert_eq!(output.len(), output_dim);
            let gradient = brain.backward(Array1::ones(output_dim).view()).unwrap();
            prop_assert_eq!(gradient.len(), input_dim);
        }

        #[test]
        fn test_replay_buffer_evicts_oldest(capacity in 1usize..30) {
            let mut buffer = ReplayBuffer::with_seed(capacity, 0);
            for i in 0..=capacity {
                buffer.add(experience(i));
            }
            prop_assert_eq!(buffer.len(), capacity);
            let sentinel = experience(0);
            prop_assert!(buffer.iter().all(|e| *e != sentinel));
            let newest = experience(capacity);
            prop_assert_eq!(buffer.get(capacity - 1), Some(&newest));
        }

        #[test]
        fn test_sample_batch_distinct_and_parallel(
            stored in 1usize..40,
            fraction in 0.0f64..=1.0,
            seed in any::<u64>()
        ) {
            let batch_size = ((stored as f64) * fraction).floor() as usize;
            let mut buffer = ReplayBuffer::with_seed(64, seed);
            for i in 0..stored {
                buffer.add(experience(i));
            }

            let batch = buffer.sample_batch(batch_size).unwrap();
            let unique: HashSet<usize> = batch.indices.iter().copied().collect();
            prop_assert_eq!(unique.len(), batch_size);

            for j in 0..batch_size {
                let original = experience(batch.indices[j]);
                prop_assert_eq!(&batch.states[j], &original.state);
                prop_assert_eq!(&batch.actions[j], &original.action);
                prop_assert_eq!(batch.rewards[j], original.reward);
                prop_assert_eq!(&batch.next_states[j], &original.next_state);
            }

            prop_assert!(buffer.sample_batch(stored + 1).is_err());
        }
    }
}
