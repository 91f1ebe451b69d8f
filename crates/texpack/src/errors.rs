/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use bytemuck::PodCastError;

/// Errors that can occur when reinterpreting pixel buffers
///
/// Packing and unpacking single values is total and has no error path,
/// the only fallible surface in this crate is reinterpreting whole
/// byte slices as packed pixels, which can fail on layout grounds
pub enum FormatErrors {
    /// The length of the byte slice does not evenly divide
    /// into whole pixels
    UnevenLength(usize, usize),
    /// The byte slice is not aligned to the packed integer
    UnalignedSlice,
    /// Errors from the underlying cast we can't classify further
    InvalidCast(PodCastError)
}

impl Debug for FormatErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatErrors::UnevenLength(length, pixel_size) => {
                writeln!(
                    f,
                    "Pixel size of {pixel_size} cannot evenly divide slice length {length}"
                )
            }
            FormatErrors::UnalignedSlice => {
                writeln!(f, "Slice is not aligned to the packed pixel representation")
            }
            FormatErrors::InvalidCast(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl Display for FormatErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormatErrors {}
