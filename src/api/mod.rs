pub mod client;
pub mod types;

pub use client::{Fetch, MspApiClient, DEFAULT_BASE_URL};
