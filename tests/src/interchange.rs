/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Moving pixel data between formats through the canonical vector

use glam::Vec4;
use nanorand::Rng;
use texpack::{Bgra4444, Rgba16F, Rgba8888};

use crate::{round_trip, round_trip_scaled};

#[test]
fn scaled_views_agree_across_formats() {
    // the scaled view is the common [0, 1] currency between formats,
    // 8 bit data pushed through the half float format loses at most
    // one count per channel to binary16 rounding plus truncation
    let mut rand = nanorand::WyRand::new();

    for _ in 0..100 {
        let original = Rgba8888::from_bits(rand.generate::<u32>());
        let normalized = original.to_scaled_vector();

        let through_half = Rgba16F::from_scaled_vector(normalized);
        let back = Rgba8888::from_scaled_vector(through_half.to_scaled_vector());

        let error = (back.to_vector() - original.to_vector()).abs();
        assert!(error.max_element() <= 1.0, "{original} came back {back}");
    }
}

#[test]
fn four_bit_data_is_exact_in_every_wider_format() {
    // all 16 steps of the 4 bit format are multiples of 1/15, those
    // are exact in the 4 bit format and land on exact ratios the
    // float format preserves to within its own precision
    for step in 0..=15_u16 {
        let value = f32::from(step) / 15.0;
        let v = Vec4::splat(value);

        assert_eq!(round_trip::<Bgra4444>(v), v);

        let through_half = round_trip::<Rgba16F>(v);
        let error = (through_half - v).abs().max_element();
        assert!(error <= value / 1024.0, "step {step} drifted by {error}");
    }
}

#[test]
fn scaled_round_trips_stay_in_range() {
    let mut rand = nanorand::WyRand::new();

    for _ in 0..200 {
        let v = Vec4::new(
            rand.generate::<f32>(),
            rand.generate::<f32>(),
            rand.generate::<f32>(),
            rand.generate::<f32>()
        );

        for back in [
            round_trip_scaled::<Bgra4444>(v),
            round_trip_scaled::<Rgba8888>(v),
            round_trip_scaled::<Rgba16F>(v)
        ] {
            assert!(back.min_element() >= 0.0);
            assert!(back.max_element() <= 1.0);
        }
    }
}

#[test]
fn clamping_is_idempotent_for_every_fixed_point_format() {
    let wild = Vec4::new(-2.0, 2.0, 0.5, 1.5);

    assert_eq!(
        Bgra4444::from_vector(wild),
        Bgra4444::from_vector(wild.clamp(Vec4::ZERO, Vec4::ONE))
    );
    assert_eq!(
        Rgba8888::from_scaled_vector(wild),
        Rgba8888::from_scaled_vector(wild.clamp(Vec4::ZERO, Vec4::ONE))
    );
}

#[test]
fn half_float_saturates_instead_of_clamping() {
    let v = Vec4::new(100000.0, -100000.0, 65504.0, 0.0);
    let back = round_trip::<Rgba16F>(v);

    assert_eq!(back.x, f32::INFINITY);
    assert_eq!(back.y, f32::NEG_INFINITY);
    assert_eq!(back.z, 65504.0);
}
