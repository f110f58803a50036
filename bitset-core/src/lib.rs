#![no_std]

//! Bitset Core - fixed-universe packed bitset engine
//!
//! This crate provides a dense set of integers drawn from a universe
//! `{0, ..., N-1}` fixed at construction, with set algebra, the subset
//! order, directional scans, hashing and text/byte encodings. It has no I/O
//! and no global state; every fallible operation returns [`Result`].
//!
//! ## Layers
//!
//! - [`word`]: packed word layout
//! - [`bitset`]: storage, elementwise access, bulk operations
//! - [`algebra`]: union, intersection, difference, symmetric difference, complement
//! - [`order`]: equality and the subset partial order
//! - [`scan`]: nearest-element queries and iteration
//! - [`hash`], [`encoding`]: structural hash, text and byte forms
//! - [`factory`]: reusable configuration for sets over one universe

extern crate alloc;

pub mod algebra;
pub mod bitset;
pub mod encoding;
pub mod error;
pub mod factory;
pub mod hash;
pub mod order;
pub mod scan;
pub mod word;

pub use bitset::BitSet;
pub use error::*;
pub use factory::BitSetFactory;
pub use scan::Ones;
pub use word::{Word, WORD_BITS};
