//! Command module structure for reportcheck CLI

pub mod catalog;
pub mod check;
