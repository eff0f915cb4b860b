//! # Domain Models
//!
//! This crate contains pure hub types with a single dependency (`serde`).
//! Keep it lean: no I/O, networking, or navigation logic, only data and simple lookups.

pub mod catalog;
pub mod config;
pub mod message;
pub mod selection;
