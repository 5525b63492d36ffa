//! Benchmark harness comparing three-way and two-way classification over nested pairs
pub mod config;
pub mod legacy;
pub mod runner;
