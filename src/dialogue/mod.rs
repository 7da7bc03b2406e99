pub mod controller;
pub mod types;

pub use controller::SkillEngine;
pub use types::{Answer, Directive, Intent, IntentRequest, Session, Task};
