// tests/gid_tests.rs

use tiled_geom::{TileId, FLIP_D, FLIP_H, FLIP_V, LOCAL_ID_MASK};

#[test]
fn decode_encode_round_trip() {
    // Sweep id patterns across the 29-bit range, all 8 flag combos each.
    let ids = [0u32, 1, 2, 42, 0x1000, 0xFFFF, 0x0FFF_FFFF, LOCAL_ID_MASK];
    for &id in &ids {
        for bits in 0u8..8 {
            let (h, v, d) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            let packed = TileId::encode(id, h, v, d);
            assert_eq!(packed.decode(), (id, h, v, d), "id={id:#x} bits={bits:03b}");
        }
    }
}

#[test]
fn known_bit_positions() {
    let packed = TileId::encode(7, true, false, true);
    assert_eq!(packed.raw(), FLIP_H | FLIP_D | 7);
    assert!(packed.flip_h());
    assert!(!packed.flip_v());
    assert!(packed.flip_d());
    assert_eq!(packed.local_id(), 7);
}

#[test]
fn reencoding_a_flagged_id_is_last_write_wins() {
    let first = TileId::encode(99, true, true, true);
    // Passing the still-flagged raw value back in must not leak old flags.
    let second = TileId::encode(first.raw(), false, false, false);
    assert_eq!(second.raw(), 99);
    assert_eq!(second.decode(), (99, false, false, false));
}

#[test]
fn flags_value_matches_the_accessors() {
    let packed = TileId(FLIP_V | 12);
    let flags = packed.flags();
    assert!(!flags.h);
    assert!(flags.v);
    assert!(!flags.d);
}
