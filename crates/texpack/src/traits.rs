/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::Display;
use core::hash::Hash;

use glam::Vec4;
use texpack_core::pixel_info::PixelInfo;

/// Encapsulates a packed pixel format.
///
/// All formats in this crate implement this trait, it is the capability
/// set a surrounding pixel framework consumes: construction from and
/// conversion to the canonical vector, the range adjusted scaled view of
/// the same, raw access to the packed bits and the format's metadata
/// descriptor.
///
/// Equality and hashing are part of the contract through the `Eq` and
/// `Hash` supertraits, both are defined purely in terms of the packed
/// integer, two values are equal iff their packed integers are equal.
///
/// # Example
/// ```
/// use texpack::traits::PackedPixel;
/// use texpack::{Rgba8888, Vec4};
///
/// fn round_trip<P: PackedPixel>(v: Vec4) -> Vec4 {
///     P::from_vector(v).to_vector()
/// }
///
/// let v = round_trip::<Rgba8888>(Vec4::new(128.0, 64.0, 32.0, 255.0));
/// assert_eq!(v, Vec4::new(128.0, 64.0, 32.0, 255.0));
/// ```
pub trait PackedPixel: Copy + Eq + Hash + Display {
    /// The integer type holding the packed bits, the sole state
    /// of the format
    type Bits: Copy + Eq;

    /// Shape of the format, component count, per channel bit depth,
    /// channel grouping and alpha policy
    const INFO: PixelInfo;

    /// Wrap an already packed value
    fn from_bits(bits: Self::Bits) -> Self;

    /// Get the packed value
    fn bits(self) -> Self::Bits;

    /// Pack a canonical vector into this format
    ///
    /// This never fails, components outside the format's natural range
    /// are clamped or saturated per the format's rules
    fn from_vector(v: Vec4) -> Self;

    /// Unpack to the canonical vector, in the format's natural range
    fn to_vector(self) -> Vec4;

    /// Pack from the range adjusted scaled view
    ///
    /// The default forwards to [`from_vector`](PackedPixel::from_vector),
    /// which is correct for formats whose natural range is already
    /// `[0, 1]`
    fn from_scaled_vector(v: Vec4) -> Self {
        Self::from_vector(v)
    }

    /// Unpack to the range adjusted scaled view
    ///
    /// The default forwards to [`to_vector`](PackedPixel::to_vector)
    fn to_scaled_vector(self) -> Vec4 {
        self.to_vector()
    }
}
