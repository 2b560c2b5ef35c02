//! Generation and validation of short join codes for invite links.
//!
//! Codes are drawn from `A-Z`, `a-z`, `0-9` and `-`. Validation always
//! expects exactly seven characters, whatever length a code was generated with.

pub mod cli;
pub mod config;
pub mod core;

pub use config::Config;
pub use core::{
    generate_join_code, is_valid, JoinCode, JoinCodeError, JoinCodeGenerator, ALPHABET,
    DEFAULT_LENGTH, VALID_LENGTH,
};
