/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde")]

use alloc::format;

use serde::ser::*;

use crate::pixel_info::{AlphaMode, ChannelGrouping, PixelInfo};

impl Serialize for ChannelGrouping {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // grouping serialization is simply it's debug value
        serializer.serialize_str(&format!("{:?}", self))
    }
}

impl Serialize for AlphaMode {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(&format!("{:?}", self))
    }
}

impl Serialize for PixelInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("PixelInfo", 4)?;
        state.serialize_field("components", &self.components)?;
        state.serialize_field("bits_per_channel", &self.bits_per_channel)?;
        state.serialize_field("grouping", &self.grouping)?;
        state.serialize_field("alpha_mode", &self.alpha_mode)?;
        state.end()
    }
}
