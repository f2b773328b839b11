//! Property-based tests for queue invariants

mod queue_properties;
