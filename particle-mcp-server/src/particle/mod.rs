pub mod client;

pub use client::ParticleClient;
