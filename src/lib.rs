//! # Podracer - Minimal DDPG Reinforcement Learning Stack
//!
//! Podracer is a small, from-scratch actor-critic library for continuous
//! control. Networks are plain stacks of hand-differentiated layers, trained
//! with a fixed-rate gradient descent step, and combined into a DDPG agent
//! that learns from a bounded replay buffer.
//!
//! ## Key Features
//!
//! - **Layers**: Dense, Tanh and Linear, each with an explicit backward pass
//! - **Brain**: a network assembled from a list of layer names, sized from
//!   input, output and hidden widths
//! - **Replay Buffer**: FIFO storage with uniform sampling without replacement
//! - **DDPG Agent**: actor, critic and one-step-lagged target copies
//! - **Reproducibility**: a single seed fixes initial weights and sampling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use podracer::builders::AgentBuilder;
//! use ndarray::Array1;
//!
//! let mut agent = AgentBuilder::new(5, 3)
//!     .hidden_dim(32)
//!     .buffer_size(500)
//!     .batch_size(100)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let state = Array1::zeros(5);
//! let action = agent.forward(state.view()).unwrap();
//! let next_state = Array1::from_elem(5, 0.1);
//! agent.learn(state.view(), action.view(), 0.5, next_state.view(), 100).unwrap();
//! ```
//!
//! ## Module Organization
//!
//! - [`agent`] - The DDPG agent and the continuous-control agent trait
//! - [`builders`] - Builder patterns for agents and replay buffers
//! - [`config`] - Hyperparameters, loadable from JSON
//! - [`error`] - Error types and result handling
//! - [`layers`] - Layer trait, layer variants and weight initialization
//! - [`loss`] - Loss functions for the critic
//! - [`metrics`] - Training diagnostics
//! - [`network`] - The layered network ("brain")
//! - [`replay_buffer`] - Experience replay

pub mod agent;
pub mod builders;
pub mod config;
pub mod error;
pub mod layers;
pub mod loss;
pub mod metrics;
pub mod network;
pub mod replay_buffer;

pub use agent::DdpgAgent;
pub use config::DdpgConfig;
pub use error::{PodError, Result};
pub use network::Brain;

#[cfg(test)]
mod tests;
