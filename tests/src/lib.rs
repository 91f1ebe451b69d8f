/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Workspace level tests for the texpack family
//!
//! These exercise the crates together through their public surface,
//! per format unit tests live next to the formats themselves

#![allow(unused_imports, unused)]

use glam::Vec4;
use texpack::traits::PackedPixel;
use texpack::{Bgra4444, Rgba16F, Rgba8888};

mod equality;
mod interchange;

/// Pack then unpack a vector through any format
pub fn round_trip<P: PackedPixel>(v: Vec4) -> Vec4 {
    P::from_vector(v).to_vector()
}

/// Pack then unpack through the scaled view of any format
pub fn round_trip_scaled<P: PackedPixel>(v: Vec4) -> Vec4 {
    P::from_scaled_vector(v).to_scaled_vector()
}
