//! Fluent builders on top of [`crate::commands`].

pub mod strip;
