/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde-support")]

//! Serde support for packed values
//!
//! A format serializes as its packed integer, nothing else, mirroring
//! the equality contract, what you serialize is the sole state

use serde::ser::*;

use crate::formats::bgra4444::Bgra4444;
use crate::formats::rgba16f::Rgba16F;
use crate::formats::rgba8888::Rgba8888;

impl Serialize for Bgra4444 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_u16(self.bits())
    }
}

impl Serialize for Rgba16F {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_u64(self.bits())
    }
}

impl Serialize for Rgba8888 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_u32(self.bits())
    }
}
