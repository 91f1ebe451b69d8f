/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Zero copy reinterpretation between packed pixels and byte buffers
//!
//! [`Rgba8888`]'s packed integer is bit identical to the plain
//! `[r, g, b, a]` byte layout, so a buffer of interleaved RGBA bytes
//! and a buffer of packed values are the same bytes viewed through two
//! types. The routines here perform that view change without copying,
//! through `bytemuck`.
//!
//! Going from pixels to bytes always succeeds. The other direction can
//! fail on layout grounds, a byte slice may be misaligned for a `u32`
//! or have a length that does not divide into whole pixels, both are
//! reported, never papered over.
//!
//! The byte-for-byte equivalence between the two views holds on little
//! endian hosts, which is also the field order the packed integer is
//! specified in. [`Rgba8888::to_bytes`] is the endian stable per value
//! variant.

use texpack_core::log::trace;

use crate::errors::FormatErrors;
use crate::formats::rgba8888::Rgba8888;

/// Reinterpret a buffer of interleaved RGBA bytes as packed pixels,
/// without copying
///
/// # Arguments
///
/// * `bytes`: Interleaved `[r, g, b, a]` data, four bytes per pixel
///
/// returns: A packed pixel view of the same memory, or an error if the
/// slice is misaligned or its length is not a multiple of four
///
/// # Example
/// ```
/// use texpack::conversions::bytes_as_pixels;
///
/// // a decoded interleaved buffer, two pixels
/// let data = vec![0xff, 0x00, 0x00, 0xff, 0x00, 0xff, 0x00, 0xff];
/// let pixels = bytes_as_pixels(&data).unwrap();
///
/// assert_eq!(pixels.len(), 2);
/// assert_eq!(pixels[0].to_bytes(), [0xff, 0x00, 0x00, 0xff]);
/// ```
pub fn bytes_as_pixels(bytes: &[u8]) -> Result<&[Rgba8888], FormatErrors> {
    trace!("reinterpreting {} bytes as packed rgba", bytes.len());

    bytemuck::try_cast_slice(bytes).map_err(|e| match e {
        bytemuck::PodCastError::OutputSliceWouldHaveSlop => {
            FormatErrors::UnevenLength(bytes.len(), core::mem::size_of::<Rgba8888>())
        }
        bytemuck::PodCastError::TargetAlignmentGreaterAndInputNotAligned => {
            FormatErrors::UnalignedSlice
        }
        other => FormatErrors::InvalidCast(other)
    })
}

/// Mutable variant of [`bytes_as_pixels`]
pub fn bytes_as_pixels_mut(bytes: &mut [u8]) -> Result<&mut [Rgba8888], FormatErrors> {
    let length = bytes.len();

    bytemuck::try_cast_slice_mut(bytes).map_err(|e| match e {
        bytemuck::PodCastError::OutputSliceWouldHaveSlop => {
            FormatErrors::UnevenLength(length, core::mem::size_of::<Rgba8888>())
        }
        bytemuck::PodCastError::TargetAlignmentGreaterAndInputNotAligned => {
            FormatErrors::UnalignedSlice
        }
        other => FormatErrors::InvalidCast(other)
    })
}

/// Reinterpret packed pixels as their interleaved RGBA byte layout,
/// without copying
///
/// This direction never fails, a `u32` slice is always validly viewable
/// as bytes
pub fn pixels_as_bytes(pixels: &[Rgba8888]) -> &[u8] {
    bytemuck::cast_slice(pixels)
}
