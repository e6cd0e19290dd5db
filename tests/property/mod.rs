//! Property-based tests
//!
//! Uses proptest to check invariants over generated inputs

mod frame_proptest;
mod identity_proptest;
