//! Salary calculation engine
//!
//! This crate derives take-home pay, NDFL (13% income tax) and employer cost
//! from a single entered amount, a salary mode and a flag saying whether the
//! amount already includes tax. It also owns the amount field's input
//! normalization and grouped redisplay.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod session;
