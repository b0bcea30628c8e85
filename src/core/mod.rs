//! Configuration, caller input and upstream data types

pub mod config;
pub mod input;
pub mod models;
