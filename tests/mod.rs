//! Test suite for DomUnity
//!
//! This module organizes all tests. Tests that need PostgreSQL read
//! `DATABASE_URL` and return early when it is not set.

pub mod common;
pub mod property;
