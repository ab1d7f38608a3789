/// `false`, and the marker for an absent optional value, 0x00
pub const FALSE: u8 = 0x00;
/// `true`, and the marker for a present optional value, 0x01
pub const TRUE: u8 = 0x01;
/// Absent optional value.
pub const NONE: u8 = FALSE;
/// Present optional value, followed by the value itself.
pub const SOME: u8 = TRUE;

/// Marker set reported when a boolean or option marker is invalid.
pub(crate) const EXPECTED_MARKER: &str = "0x00 or 0x01";

/// Width of an encoded `f32`.
pub const F32_LEN: usize = 4;
/// Width of an encoded `f64`.
pub const F64_LEN: usize = 8;

/// Starting capacity of an [`OutputBuffer`](super::OutputBuffer).
pub const DEFAULT_CAPACITY: usize = 16;

/// Longest sequence of zero-sized values a decoder accepts. Such values take no input,
/// so running out of bytes can't bound their count.
pub const MAX_ZERO_SIZED_LEN: usize = 1 << 20;
