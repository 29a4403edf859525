//! Shared test collaborators

pub mod mocks;
