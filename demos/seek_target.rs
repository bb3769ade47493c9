/***
# Seek the checkpoint.

* A pod moves on the unit square towards a checkpoint.
* The state is 5D: pod position, checkpoint position and the distance between them
  (scaled by the diagonal so every entry lies in [0, 1]).
* The action is 3D, each entry in [-1, 1]: the point the pod steers towards (x, y) and its thrust.
* The reward is the distance closed during the step, plus 1 when the checkpoint is reached.
* Reaching a checkpoint spawns a new one at a random position.
***/

use ndarray::{array, Array1};
use podracer::agent::{ContinuousAgent, DdpgAgent};
use podracer::builders::AgentBuilder;
use podracer::metrics::Statistics;
use rand::Rng;

const EPOCHS: usize = 30;
const STEPS_PER_EPOCH: usize = 500;
const EPSILON_DECAY: f32 = 0.005;
const MAX_SPEED: f32 = 0.05;
const CHECKPOINT_RADIUS: f32 = 0.05;

struct SeekTarget {
    pod: [f32; 2],
    checkpoint: [f32; 2],
}

impl SeekTarget {
    fn reset(rng: &mut impl Rng) -> Self {
        SeekTarget {
            pod: [rng.gen(), rng.gen()],
            checkpoint: [rng.gen(), rng.gen()],
        }
    }

    fn distance(&self) -> f32 {
        let dx = self.pod[0] - self.checkpoint[0];
        let dy = self.pod[1] - self.checkpoint[1];
        (dx * dx + dy * dy).sqrt()
    }

    fn observe(&self) -> Array1<f32> {
        array![
            self.pod[0],
            self.pod[1],
            self.checkpoint[0],
            self.checkpoint[1],
            self.distance() / std::f32::consts::SQRT_2
        ]
    }

    // Map the [-1, 1] action into a steering point and a thrust fraction, then move.
    fn step(&mut self, action: &Array1<f32>, rng: &mut impl Rng) -> f32 {
        let aim = [(action[0] + 1.0) / 2.0, (action[1] + 1.0) / 2.0];
        let thrust = ((action[2] + 1.0) / 2.0).clamp(0.0, 1.0) * MAX_SPEED;

        let before = self.distance();
        let (dx, dy) = (aim[0] - self.pod[0], aim[1] - self.pod[1]);
        let norm = (dx * dx + dy * dy).sqrt().max(1e-6);
        self.pod[0] = (self.pod[0] + dx / norm * thrust).clamp(0.0, 1.0);
        self.pod[1] = (self.pod[1] + dy / norm * thrust).clamp(0.0, 1.0);

        let mut reward = before - self.distance();
        if self.distance() < CHECKPOINT_RADIUS {
            reward += 1.0;
            self.checkpoint = [rng.gen(), rng.gen()];
        }
        reward
    }
}

fn main() {
    let now = std::time::Instant::now();
    let mut rng = rand::thread_rng();

    let mut agent: DdpgAgent = AgentBuilder::new(5, 3)
        .hidden_dim(32)
        .buffer_size(500)
        .batch_size(100)
        .epsilon(0.5)
        .seed(2024)
        .build()
        .expect("default hyperparameters are valid");
    let mut epoch_rewards = Vec::with_capacity(EPOCHS);

    for epoch in 0..EPOCHS {
        let mut env = SeekTarget::reset(&mut rng);
        let mut state = env.observe();
        let mut epsilon = agent.config().epsilon;
        agent.reset_reward();

        for _ in 0..STEPS_PER_EPOCH {
            // Epsilon-greedy: a uniformly random action, otherwise the policy.
            let policy_action = agent.act(state.view()).expect("state has the configured width");
            let action = if rng.gen::<f32>() < epsilon {
                Array1::from_shape_fn(agent.action_dim(), |_| rng.gen_range(-1.0..1.0))
            } else {
                policy_action
            };

            let reward = env.step(&action, &mut rng);
            let next_state = env.observe();
            agent
                .observe(state.view(), action.view(), reward, next_state.view())
                .expect("transition has the configured shapes");
            state = next_state;

            epsilon = (epsilon - EPSILON_DECAY).max(0.0);
        }

        epoch_rewards.push(agent.total_reward());
        let critic = agent.log().recent_critic_stats(STEPS_PER_EPOCH);
        let actor = agent.log().recent_actor_stats(STEPS_PER_EPOCH);
        println!(
            "Epoch {:>3}: reward {:>7.3}  critic loss {:.5}  actor loss {:.5}",
            epoch,
            agent.total_reward(),
            critic.mean,
            actor.mean
        );
    }
    let summary = Statistics::from_slice(&epoch_rewards);
    println!(
        "Epoch reward: mean {:.3}, std {:.3}, best {:.3}",
        summary.mean, summary.std, summary.max
    );
    println!("Training steps: {}", agent.log().steps());
    println!("Time taken: {:?}", now.elapsed());
}
