pub mod api;
pub mod dialogue;
pub mod reference;
pub mod speech;

// Re-export the surface a driver needs for convenient access
pub use api::client::MspApiClient;
pub use dialogue::controller::SkillEngine;
pub use dialogue::types::{Directive, Intent, IntentRequest, Session, Task};
