//! Testing utilities

pub mod mocks;
