/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Equality and hashing are defined by the packed integer alone

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use glam::Vec4;
use nanorand::Rng;
use texpack::{Bgra4444, Rgba16F, Rgba8888};

fn hash_of<H: Hash>(value: &H) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn equal_bits_mean_equal_values_and_hashes() {
    let mut rand = nanorand::WyRand::new();

    for _ in 0..100 {
        let bits = rand.generate::<u32>();

        // built two different ways, interchangeable all the same
        let a = Rgba8888::from_bits(bits);
        let b = Rgba8888::from_vector(a.to_vector());

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}

#[test]
fn distinct_bits_are_never_equal() {
    let a = Bgra4444::from_bits(0x0f00);
    let b = Bgra4444::from_bits(0x0f01);

    assert_ne!(a, b);
}

#[test]
fn nan_payloads_compare_by_bits_not_by_float_semantics() {
    // two NaN carrying values with identical bits are equal even
    // though their vector forms are not comparable
    let a = Rgba16F::from_vector(Vec4::new(f32::NAN, 0.0, 0.0, 0.0));
    let b = Rgba16F::from_bits(a.bits());

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert!(a.to_vector().x.is_nan());
}

#[test]
fn display_renders_canonical_order_except_bgra() {
    let rgba = Rgba8888::from_bytes([255, 128, 0, 255]);
    assert!(rgba.to_string().starts_with("Rgba8888(r: 255.0000"));

    let half = Rgba16F::from_vector(Vec4::new(0.5, 0.0, 0.0, 1.0));
    assert!(half.to_string().starts_with("Rgba16F(x: 0.5000"));

    let bgra = Bgra4444::from_vector(Vec4::new(0.0, 0.0, 1.0, 0.0));
    assert!(bgra.to_string().starts_with("Bgra4444(b: 1.0000"));
}
