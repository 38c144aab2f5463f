//! Tradeoff Advisor - Conditional comparisons of two technical options.
//!
//! Scores a pair of options against weighted attributes and user
//! constraints, then explains the trade-off and states which option to pick
//! depending on which factor matters more.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
