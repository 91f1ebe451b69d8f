/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the texpack family of crates
//!
//! This crate provides the small set of primitives every packed
//! pixel format depends on
//!
//! It currently contains
//!
//! - Metadata descriptors for packed pixel formats, i.e how many
//!   components a format carries, at what bit depth, and how its
//!   alpha channel is to be interpreted
//! - IEEE 754 half precision (binary16) conversion routines
//! - A logging shim shared by the family
//!
//! This library is `#[no_std]`, no allocation is needed by any
//! routine in it.
//!
//! # Features
//!  - `std`: Enables `std` facilities in dependent crates.
//!
//!  - `serde`: Enables serializing of the data structures
//!     present in the crate
//!
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![macro_use]
extern crate alloc;

pub mod f16;
pub mod log;
pub mod pixel_info;
pub mod serde;
