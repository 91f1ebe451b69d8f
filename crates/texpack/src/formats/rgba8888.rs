/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A 32 bit RGBA format storing four channels at 8 bits each
//!
//! Bit layout, low to high:
//! ```text
//! ╔══════════╤══════════╤══════════╤══════════╗
//! ║ 0..=7    │ 8..=15   │ 16..=23  │ 24..=31  ║
//! ╟──────────┼──────────┼──────────┼──────────╢
//! ║ red (x)  │ green (y)│ blue (z) │ alpha (w)║
//! ╚══════════╧══════════╧══════════╧══════════╝
//! ```
//!
//! The natural range of the canonical vector is `[0, 255]` here, the
//! scaled accessors provide the normalized `[0, 1]` view. The packed
//! integer is bit identical to the plain `[r, g, b, a]` byte layout on
//! little endian hosts, which is what makes the zero copy slice
//! reinterpretation in [`conversions`](crate::conversions) possible.

use core::fmt::{Display, Formatter};

use bytemuck::{Pod, Zeroable};
use glam::Vec4;
use texpack_core::pixel_info::{AlphaMode, ChannelGrouping, PixelInfo};

use crate::traits::PackedPixel;

/// Four channels packed at 8 bits each into a `u32`, red in the low
/// byte, alpha in the high one.
///
/// Packing clamps every component to `[0, 255]` in a single lane wise
/// operation and converts with the native float to integer conversion,
/// which truncates toward zero. Component values that are already
/// integers in range therefore round trip exactly.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct Rgba8888(u32);

impl Rgba8888 {
    /// Wrap an already packed value
    pub const fn from_bits(bits: u32) -> Rgba8888 {
        Rgba8888(bits)
    }

    /// Get the packed value, the sole state of the format
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Build a packed value from the natural `[r, g, b, a]` byte layout
    pub const fn from_bytes(bytes: [u8; 4]) -> Rgba8888 {
        Rgba8888(u32::from_le_bytes(bytes))
    }

    /// Get the channels in the natural `[r, g, b, a]` byte layout
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Pack a canonical vector whose components are in `[0, 255]`.
    ///
    /// All four channels are clamped in one vectorized step, the float
    /// to integer conversion then truncates toward zero, `254.9` packs
    /// as `254`.
    #[inline]
    pub fn from_vector(v: Vec4) -> Rgba8888 {
        let clamped = v.clamp(Vec4::ZERO, Vec4::splat(255.0));
        let [x, y, z, w] = clamped.to_array();

        Rgba8888(u32::from_le_bytes([x as u8, y as u8, z as u8, w as u8]))
    }

    /// Unpack to the canonical vector, components in `[0, 255]`
    #[inline]
    pub fn to_vector(self) -> Vec4 {
        let [x, y, z, w] = self.0.to_le_bytes();

        Vec4::new(f32::from(x), f32::from(y), f32::from(z), f32::from(w))
    }

    /// Pack from the normalized `[0, 1]` view, scaling by 255 first
    ///
    /// # Example
    /// ```
    /// use texpack::{Rgba8888, Vec4};
    ///
    /// let packed = Rgba8888::from_scaled_vector(Vec4::new(1.0, 0.0, 0.0, 1.0));
    /// assert_eq!(packed.bits(), 0xff00_00ff);
    /// ```
    #[inline]
    pub fn from_scaled_vector(v: Vec4) -> Rgba8888 {
        Rgba8888::from_vector(v * 255.0)
    }

    /// Unpack to the normalized `[0, 1]` view, correctly rounded per
    /// channel
    #[inline]
    pub fn to_scaled_vector(self) -> Vec4 {
        self.to_vector() / 255.0
    }
}

impl PackedPixel for Rgba8888 {
    type Bits = u32;

    const INFO: PixelInfo = PixelInfo {
        components:       4,
        bits_per_channel: 8,
        grouping:         ChannelGrouping::ColorAlpha,
        alpha_mode:       AlphaMode::Unassociated
    };

    fn from_bits(bits: u32) -> Self {
        Rgba8888::from_bits(bits)
    }

    fn bits(self) -> u32 {
        self.0
    }

    fn from_vector(v: Vec4) -> Self {
        Rgba8888::from_vector(v)
    }

    fn to_vector(self) -> Vec4 {
        Rgba8888::to_vector(self)
    }

    fn from_scaled_vector(v: Vec4) -> Self {
        Rgba8888::from_scaled_vector(v)
    }

    fn to_scaled_vector(self) -> Vec4 {
        Rgba8888::to_scaled_vector(self)
    }
}

impl Display for Rgba8888 {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let v = self.to_vector();

        write!(
            f,
            "Rgba8888(r: {:.4}, g: {:.4}, b: {:.4}, a: {:.4})",
            v.x, v.y, v.z, v.w
        )
    }
}
