//! A framework for symmetric cryptography primitives.

#![no_std]

pub mod hasher;
pub mod permutation;

pub use hasher::*;
pub use permutation::*;
