//! Property-based tests

mod id_proptest;
mod token_proptest;
