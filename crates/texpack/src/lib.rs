/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Packed pixel formats with bit exact conversions to and from 4 component vectors
//!
//! Each format in this crate stores exactly one fixed width integer, its
//! packed value, and converts losslessly-as-possible to and from the
//! canonical interchange representation, a [`Vec4`] holding `(x, y, z, w)`
//!
//! | Format                           | Storage | Bits per channel         |
//! |----------------------------------|---------|--------------------------|
//! | [`Bgra4444`](formats::bgra4444)  | `u16`   | 4, fixed point           |
//! | [`Rgba16F`](formats::rgba16f)    | `u64`   | 16, IEEE 754 binary16    |
//! | [`Rgba8888`](formats::rgba8888)  | `u32`   | 8, fixed point           |
//!
//! The packed integer is the sole state of a format, the vector form is
//! derived on demand and never cached, so two values with equal packed
//! integers are equal and interchangeable no matter how they were built.
//!
//! Packing never fails. Out of range components are silently clamped by
//! the fixed point formats and saturate to signed infinity in the float
//! format, see each format's module docs for its exact rounding rules.
//!
//! ```
//! use texpack::{Bgra4444, Vec4};
//!
//! let packed = Bgra4444::from_vector(Vec4::new(1.0, 0.0, 0.0, 0.0));
//! assert_eq!(packed.bits(), 0x0f00);
//! ```
//!
//! # Features
//! - `log`: route the family's trace output through the `log` crate
//! - `serde-support`: serialize packed values as their packed integer
#![allow(clippy::uninlined_format_args)]
pub extern crate texpack_core;

pub use glam::Vec4;

pub mod conversions;
pub mod errors;
pub mod formats;
mod serde;
pub mod traits;

pub use formats::bgra4444::Bgra4444;
pub use formats::rgba16f::Rgba16F;
pub use formats::rgba8888::Rgba8888;
pub use traits::PackedPixel;
