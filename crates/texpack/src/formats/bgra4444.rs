/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A 16 bit packed format storing four channels at 4 bits each
//!
//! Bit layout, low to high:
//! ```text
//! ╔══════════╤══════════╤══════════╤══════════╗
//! ║ 0..=3    │ 4..=7    │ 8..=11   │ 12..=15  ║
//! ╟──────────┼──────────┼──────────┼──────────╢
//! ║ blue (z) │ green (y)│ red (x)  │ alpha (w)║
//! ╚══════════╧══════════╧══════════╧══════════╝
//! ```
//!
//! The canonical vector maps `(x, y, z, w)` to `(red, green, blue, alpha)`,
//! each channel occupying `[0, 1]` in steps of `1/15`.

use core::fmt::{Display, Formatter};

use glam::Vec4;
use texpack_core::pixel_info::{AlphaMode, ChannelGrouping, PixelInfo};

use crate::traits::PackedPixel;

/// Four channels packed at 4 bits each into a `u16`, blue in the low
/// nibble, alpha in the high one.
///
/// Packing clamps every component to `[0, 1]` and rounds to the nearest
/// of the 16 representable steps, so a round trip through
/// [`to_vector`](Bgra4444::to_vector) is exact only for components that
/// are multiples of `1/15` and within `1/15` of the clamped input
/// otherwise.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Bgra4444(u16);

impl Bgra4444 {
    /// Wrap an already packed value
    pub const fn from_bits(bits: u16) -> Bgra4444 {
        Bgra4444(bits)
    }

    /// Get the packed value, the sole state of the format
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Pack a canonical vector.
    ///
    /// Each component is clamped to `[0, 1]` in one lane wise operation,
    /// scaled by 15 and rounded to the nearest integer. Half way cases
    /// round away from zero, so `0.5` scales to `7.5` and packs as `8`.
    ///
    /// # Example
    /// ```
    /// use texpack::{Bgra4444, Vec4};
    ///
    /// // pure red lands in bits 8..=11
    /// let red = Bgra4444::from_vector(Vec4::new(1.0, 0.0, 0.0, 0.0));
    /// assert_eq!(red.bits(), 0x0f00);
    /// ```
    #[inline]
    pub fn from_vector(v: Vec4) -> Bgra4444 {
        let scaled = (v.clamp(Vec4::ZERO, Vec4::ONE) * 15.0).round();
        let [x, y, z, w] = scaled.to_array();

        Bgra4444((z as u16) | ((y as u16) << 4) | ((x as u16) << 8) | ((w as u16) << 12))
    }

    /// Unpack to the canonical vector, each component a multiple of
    /// `1/15` in `[0, 1]`
    ///
    /// The division is the correctly rounded one, `step / 15.0`, so the
    /// result is always the nearest float to the true ratio
    #[inline]
    pub fn to_vector(self) -> Vec4 {
        let bits = self.0;

        Vec4::new(
            f32::from((bits >> 8) & 0x0f),
            f32::from((bits >> 4) & 0x0f),
            f32::from(bits & 0x0f),
            f32::from(bits >> 12)
        ) / 15.0
    }
}

impl PackedPixel for Bgra4444 {
    type Bits = u16;

    const INFO: PixelInfo = PixelInfo {
        components:       4,
        bits_per_channel: 4,
        grouping:         ChannelGrouping::ColorAlpha,
        alpha_mode:       AlphaMode::Unassociated
    };

    fn from_bits(bits: u16) -> Self {
        Bgra4444::from_bits(bits)
    }

    fn bits(self) -> u16 {
        self.0
    }

    fn from_vector(v: Vec4) -> Self {
        Bgra4444::from_vector(v)
    }

    fn to_vector(self) -> Vec4 {
        Bgra4444::to_vector(self)
    }
}

impl Display for Bgra4444 {
    /// Renders the decoded channels at limited precision, in the
    /// format's historical blue first label order
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let v = self.to_vector();

        write!(
            f,
            "Bgra4444(b: {:.4}, g: {:.4}, r: {:.4}, a: {:.4})",
            v.z, v.y, v.x, v.w
        )
    }
}
