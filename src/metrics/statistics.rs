/// Mean, sample standard deviation and range of a window of losses or rewards.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub mean: f32,
    pub std: f32,
    pub min: f32,
    pub max: f32,
    pub count: usize,
}

impl Statistics {
    /// Summarise `values`. An empty slice yields all zeros and a single
    /// value yields a zero standard deviation.
    pub fn from_slice(values: &[f32]) -> Self {
        let count = values.len();
        if count == 0 {
            return Statistics {
                mean: 0.0,
                std: 0.0,
                min: 0.0,
                max: 0.0,
                count,
            };
        }

        // Accumulate in f64; long loss histories lose precision in f32.
        let mean = values.iter().map(|&v| v as f64).sum::<f64>() / count as f64;
        let std = if count < 2 {
            0.0
        } else {
            let squares: f64 = values.iter().map(|&v| (v as f64 - mean).powi(2)).sum();
            (squares / (count - 1) as f64).sqrt()
        };
        let (min, max) = values
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        Statistics {
            mean: mean as f32,
            std: std as f32,
            min,
            max,
            count,
        }
    }
}
