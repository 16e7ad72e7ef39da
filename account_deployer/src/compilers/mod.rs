//!
//! The Solidity project compilation.
//!

pub mod downloader;
pub mod project;
pub mod solc;
