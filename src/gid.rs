//! Packed global tile id codec.
//!
//! Tiled stores per-cell mirroring in the top 3 bits of a 32-bit global id;
//! the remaining 29 bits are the unflagged local id. Decoded flags travel as
//! explicit values (`TileFlags`) carried per tile instance, never written
//! back onto shared tile data.

/// Horizontal mirror flag (bit 31).
pub const FLIP_H: u32 = 0x8000_0000;
/// Vertical mirror flag (bit 30).
pub const FLIP_V: u32 = 0x4000_0000;
/// Diagonal (anti-transpose) mirror flag (bit 29).
pub const FLIP_D: u32 = 0x2000_0000;
/// Keep lower 29 bits (bit 28 is free).
pub const LOCAL_ID_MASK: u32 = 0x1FFF_FFFF;

const FLAG_MASK: u32 = FLIP_H | FLIP_V | FLIP_D;

/// A packed 32-bit global tile id, flags included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId(pub u32);

/// Decoded mirror flags for one tile instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileFlags {
    /// Mirrored across the vertical axis.
    pub h: bool,
    /// Mirrored across the horizontal axis.
    pub v: bool,
    /// Mirrored across the tile diagonal.
    pub d: bool,
}

impl TileId {
    /// The raw packed value.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }

    /// The unflagged local id.
    #[inline]
    pub fn local_id(self) -> u32 {
        self.0 & LOCAL_ID_MASK
    }

    /// Horizontal mirror bit.
    #[inline]
    pub fn flip_h(self) -> bool {
        (self.0 & FLIP_H) != 0
    }

    /// Vertical mirror bit.
    #[inline]
    pub fn flip_v(self) -> bool {
        (self.0 & FLIP_V) != 0
    }

    /// Diagonal mirror bit.
    #[inline]
    pub fn flip_d(self) -> bool {
        (self.0 & FLIP_D) != 0
    }

    /// All three mirror bits as a value type.
    #[inline]
    pub fn flags(self) -> TileFlags {
        TileFlags {
            h: self.flip_h(),
            v: self.flip_v(),
            d: self.flip_d(),
        }
    }

    /// Splits the packed id into `(local_id, h, v, d)`.
    #[inline]
    pub fn decode(self) -> (u32, bool, bool, bool) {
        (self.local_id(), self.flip_h(), self.flip_v(), self.flip_d())
    }

    /// Packs a local id with the given mirror flags.
    ///
    /// Any flag bits already set in `local_id` are stripped first, so
    /// re-encoding a previously packed value is idempotent: the flags passed
    /// here always win.
    pub fn encode(local_id: u32, h: bool, v: bool, d: bool) -> TileId {
        let mut raw = local_id & !FLAG_MASK;
        if h {
            raw |= FLIP_H;
        }
        if v {
            raw |= FLIP_V;
        }
        if d {
            raw |= FLIP_D;
        }
        TileId(raw)
    }
}
