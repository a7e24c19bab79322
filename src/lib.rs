//! # Kinship Library
//!
//! User-based collaborative filtering over a dense user × item rating matrix.
//! Provides cosine user similarity, weighted-average rating prediction,
//! top-N ranking and RMSE evaluation.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod processing;
pub mod storage;
pub mod ui;
