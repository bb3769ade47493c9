pub mod test_replay_buffer;

/// Element-wise comparison with an absolute tolerance.
pub fn assert_close(actual: &[f32], expected: &[f32], tolerance: f32) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tolerance,
            "index {}: got {}, expected {} (tolerance {})",
            i,
            a,
            e,
            tolerance
        );
    }
}
