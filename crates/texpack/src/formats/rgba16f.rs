/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A 64 bit packed format storing four IEEE 754 binary16 floats
//!
//! Bit layout, low to high:
//! ```text
//! ╔══════════╤══════════╤══════════╤══════════╗
//! ║ 0..=15   │ 16..=31  │ 32..=47  │ 48..=63  ║
//! ╟──────────┼──────────┼──────────┼──────────╢
//! ║ x        │ y        │ z        │ w        ║
//! ╚══════════╧══════════╧══════════╧══════════╝
//! ```
//!
//! Each channel is encoded independently through
//! [`texpack_core::f16`], which owns all numeric edge cases: values
//! outside `[-65504, 65504]` saturate to signed infinity, NaN collapses
//! to one canonical bit pattern and everything half representable round
//! trips exactly.

use core::fmt::{Display, Formatter};

use glam::Vec4;
use texpack_core::f16;
use texpack_core::pixel_info::{AlphaMode, ChannelGrouping, PixelInfo};

use crate::traits::PackedPixel;

/// Four binary16 floats packed into a `u64`, x in the low word, w in
/// the high one.
///
/// Unlike the fixed point formats nothing is clamped here, channels
/// keep sign and magnitude up to the binary16 range. The scaled
/// accessors remap the natural `[-1, 1]` range to `[0, 1]` with an
/// affine transform on top of the raw conversion, they do not change
/// the bit layout.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rgba16F(u64);

impl Rgba16F {
    /// Wrap an already packed value
    pub const fn from_bits(bits: u64) -> Rgba16F {
        Rgba16F(bits)
    }

    /// Get the packed value, the sole state of the format
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Pack a canonical vector, each component rounded to the nearest
    /// binary16 value
    ///
    /// # Example
    /// ```
    /// use texpack::{Rgba16F, Vec4};
    ///
    /// let packed = Rgba16F::from_vector(Vec4::new(1.0, 0.0, 0.0, 0.0));
    /// assert_eq!(packed.bits(), 0x3c00);
    /// ```
    #[inline]
    pub fn from_vector(v: Vec4) -> Rgba16F {
        let [x, y, z, w] = v.to_array();

        Rgba16F(
            u64::from(f16::from_f32(x))
                | u64::from(f16::from_f32(y)) << 16
                | u64::from(f16::from_f32(z)) << 32
                | u64::from(f16::from_f32(w)) << 48
        )
    }

    /// Unpack to the canonical vector, exact for every stored value
    #[inline]
    pub fn to_vector(self) -> Vec4 {
        Vec4::new(
            f16::to_f32(self.0 as u16),
            f16::to_f32((self.0 >> 16) as u16),
            f16::to_f32((self.0 >> 32) as u16),
            f16::to_f32((self.0 >> 48) as u16)
        )
    }

    /// Pack from the `[0, 1]` scaled view, remapping to the natural
    /// `[-1, 1]` range first
    #[inline]
    pub fn from_scaled_vector(v: Vec4) -> Rgba16F {
        Rgba16F::from_vector(v * 2.0 - Vec4::ONE)
    }

    /// Unpack to the `[0, 1]` scaled view of the natural `[-1, 1]`
    /// range
    #[inline]
    pub fn to_scaled_vector(self) -> Vec4 {
        (self.to_vector() + Vec4::ONE) * 0.5
    }
}

impl PackedPixel for Rgba16F {
    type Bits = u64;

    const INFO: PixelInfo = PixelInfo {
        components:       4,
        bits_per_channel: 16,
        grouping:         ChannelGrouping::ColorAlpha,
        alpha_mode:       AlphaMode::Unassociated
    };

    fn from_bits(bits: u64) -> Self {
        Rgba16F::from_bits(bits)
    }

    fn bits(self) -> u64 {
        self.0
    }

    fn from_vector(v: Vec4) -> Self {
        Rgba16F::from_vector(v)
    }

    fn to_vector(self) -> Vec4 {
        Rgba16F::to_vector(self)
    }

    fn from_scaled_vector(v: Vec4) -> Self {
        Rgba16F::from_scaled_vector(v)
    }

    fn to_scaled_vector(self) -> Vec4 {
        Rgba16F::to_scaled_vector(self)
    }
}

impl Display for Rgba16F {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let v = self.to_vector();

        write!(
            f,
            "Rgba16F(x: {:.4}, y: {:.4}, z: {:.4}, w: {:.4})",
            v.x, v.y, v.z, v.w
        )
    }
}
