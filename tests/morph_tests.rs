// Host-side tests for morph target construction and the design catalog.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod morph {
    include!("../src/core/morph.rs");
}
mod catalog {
    include!("../src/core/catalog.rs");
}

use catalog::*;
use constants::*;
use glam::Vec3;
use morph::*;

#[test]
fn cuboid_has_twelve_edges() {
    let b = WireframeBuilder::new().cuboid(Vec3::ZERO, Vec3::new(2.0, 4.0, 6.0));
    assert_eq!(b.segment_count(), 12);
    let floats = b.finish();
    assert_eq!(floats.len(), 12 * FLOATS_PER_SEGMENT);
    // every coordinate sits on a face of the box
    for p in floats.chunks_exact(3) {
        assert_eq!(p[0].abs(), 1.0);
        assert_eq!(p[1].abs(), 2.0);
        assert_eq!(p[2].abs(), 3.0);
    }
}

#[test]
fn openings_are_closed_rectangles() {
    let floats = WireframeBuilder::new().opening(0.0, 0.0, 1.0, 2.0, 3.0).finish();
    assert_eq!(floats.len(), 4 * FLOATS_PER_SEGMENT);
    let segs: Vec<&[f32]> = floats.chunks_exact(6).collect();
    for i in 0..4 {
        let end = &segs[i][3..6];
        let next_start = &segs[(i + 1) % 4][0..3];
        assert_eq!(end, next_start);
        assert_eq!(segs[i][2], 1.0);
    }
    let side = WireframeBuilder::new().side_opening(-5.0, 1.0, -2.0, 3.0, 1.0);
    assert_eq!(side.segment_count(), 4);
    assert!(side.finish().chunks_exact(3).all(|p| p[0] == -5.0));
}

#[test]
fn push_pads_short_targets_with_zeros() {
    let mut set = MorphTargetSet::new(4);
    let raw = WireframeBuilder::new()
        .segment(Vec3::ONE, Vec3::splat(2.0))
        .finish();
    assert_eq!(set.push("one", raw), Ok(0));
    let t = set.get(0).unwrap();
    assert_eq!(t.positions().len(), 4 * FLOATS_PER_SEGMENT);
    assert_eq!(t.used_segments(), 1);
    assert_eq!(&t.positions()[..6], &[1.0, 1.0, 1.0, 2.0, 2.0, 2.0]);
    assert!(t.positions()[6..].iter().all(|&f| f == 0.0));
}

#[test]
fn push_rejects_oversized_and_ragged_targets() {
    let mut set = MorphTargetSet::new(2);
    let too_big = WireframeBuilder::new().cuboid(Vec3::ZERO, Vec3::ONE).finish();
    assert_eq!(
        set.push("box", too_big),
        Err(MorphError::CapacityExceeded {
            name: "box".into(),
            segments: 12,
            capacity: 2
        })
    );
    assert_eq!(
        set.push("ragged", vec![0.0; 7]),
        Err(MorphError::RaggedSegments {
            name: "ragged".into(),
            floats: 7
        })
    );
    assert!(set.is_empty());
}

#[test]
fn get_out_of_range_reports_unknown_target() {
    let set = MorphTargetSet::new(2).with("a", vec![]).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(
        set.get(3).unwrap_err(),
        MorphError::UnknownTarget { index: 3, len: 1 }
    );
}

#[test]
fn every_target_in_a_set_shares_the_buffer_length() {
    for id in [CatalogId::Services, CatalogId::AduTypes] {
        let set = id.build().expect("catalog builds");
        assert_eq!(set.buffer_len(), MORPH_BUFFER_LEN);
        for t in set.iter() {
            assert_eq!(t.positions().len(), set.buffer_len(), "{}", t.name);
            assert!(t.used_segments() > 0 && t.used_segments() <= SEGMENT_CAPACITY);
            assert!(t.positions().iter().all(|f| f.is_finite()));
        }
    }
}

#[test]
fn services_catalog_has_six_designs_in_order() {
    let set = services().unwrap();
    assert_eq!(
        set.names(),
        vec![
            "adu",
            "garage-conversion",
            "custom-home",
            "new-construction",
            "addition",
            "commercial"
        ]
    );
}

#[test]
fn adu_types_catalog_has_four_designs_in_order() {
    let set = adu_types().unwrap();
    assert_eq!(
        set.names(),
        vec!["detached", "attached", "garage-conversion", "above-garage"]
    );
}

#[test]
fn designs_have_no_degenerate_segments() {
    for set in [services().unwrap(), adu_types().unwrap()] {
        for t in set.iter() {
            let used = &t.positions()[..t.used_segments() * FLOATS_PER_SEGMENT];
            for s in used.chunks_exact(6) {
                assert!(s[..3] != s[3..], "zero-length segment in {}", t.name);
            }
        }
    }
}

#[test]
fn catalog_names_resolve() {
    assert_eq!(CatalogId::from_name("services"), Some(CatalogId::Services));
    assert_eq!(CatalogId::from_name(" adu-types "), Some(CatalogId::AduTypes));
    assert_eq!(CatalogId::from_name("types"), Some(CatalogId::AduTypes));
    assert_eq!(CatalogId::from_name("houses"), None);
    for id in [CatalogId::Services, CatalogId::AduTypes] {
        assert_eq!(CatalogId::from_name(id.name()), Some(id));
    }
}

#[test]
fn ground_grid_spans_both_axes() {
    let grid = ground_grid(8.0, 6.0, 2.0);
    // 9 lines along z, 7 along x
    assert_eq!(grid.len(), 16 * FLOATS_PER_SEGMENT);
    assert!(grid.chunks_exact(3).all(|p| p[1] == 0.0));
    assert!(ground_grid(8.0, 6.0, 0.0).is_empty());
}
