//! socialq: Relationship-Ordered Queues
//!
//! A queue where newcomers may cut in behind friends and rivals can revoke
//! the favor, with bounded quotas for both. On top of it sits a course
//! enrollment engine that lets "hackers" push into the courses they want.

pub mod cli;
pub mod config;
pub mod enrollment;
pub mod error;
pub mod logging;
pub mod queue;

pub use error::{EnrollmentError, QueueError};
pub use queue::SocialQueue;
