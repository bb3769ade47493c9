//! # Agents
//!
//! [`DdpgAgent`] learns a deterministic continuous-control policy with an
//! actor-critic pair and one-step-lagged target networks.
//!
//! ## Training cycle
//!
//! 1. The outer loop calls [`DdpgAgent::forward`] (or [`ContinuousAgent::act`])
//!    to choose an action, possibly replacing it with a random one for
//!    exploration.
//! 2. It then calls [`DdpgAgent::learn`] with the observed transition.
//! 3. While the replay buffer is filling, `learn` only stores the transition.
//!    Once it is full, each call also samples a batch, regresses the critic
//!    towards `reward + discount * Q_target(next_state, actor_target(next_state))`
//!    and pushes the critic's action gradient through the actor.
//!
//! ```rust,no_run
//! use podracer::agent::DdpgAgent;
//! use podracer::config::DdpgConfig;
//! use ndarray::Array1;
//!
//! let mut agent = DdpgAgent::new(DdpgConfig::default()).unwrap();
//! let state = Array1::zeros(5);
//! let action = agent.forward(state.view()).unwrap();
//! agent.learn(state.view(), action.view(), 1.0, state.view(), 100).unwrap();
//! ```

pub mod ddpg;
pub mod traits;

pub use ddpg::{AgentPhase, DdpgAgent};
pub use traits::ContinuousAgent;
