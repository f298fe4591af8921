//! Unit conversion utilities.
//!
//! Drawing coordinates arrive in points (1/72 inch). DrawingML measures
//! lengths in EMUs, rotations in 1/60000 of a degree and font sizes in
//! hundredths of a point.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;
pub const POINTS_PER_INCH: f64 = 72.0;

/// Rotation units per degree in `a:xfrm/@rot`.
pub const ROT_UNITS_PER_DEGREE: f64 = 60_000.0;

/// Corrects font heights reported by the metrics backend to drawing points.
pub const FONT_HEIGHT_SCALAR: f64 = 277.0 / 90.0 / 2.54;

/// Convert points to EMUs, rounding to the nearest integer.
#[inline]
pub fn pt_to_emu(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64).round() as i64
}

/// Convert points to an EMU attribute value.
#[inline]
pub fn emu_str(pt: f64) -> String {
    itoa::Buffer::new().format(pt_to_emu(pt)).to_owned()
}

/// Convert a counter-clockwise angle in degrees to DrawingML's clockwise
/// rotation units.
#[inline]
pub fn degrees_to_rot(degrees: f64) -> i64 {
    (-ROT_UNITS_PER_DEGREE * degrees).round() as i64
}

/// Font size in hundredths of a point.
#[inline]
pub fn pt_to_font_size(pt: f64) -> i64 {
    (100.0 * pt).round() as i64
}

#[inline]
pub fn inches_to_pt(inches: f64) -> f64 {
    inches * POINTS_PER_INCH
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pt_to_emu() {
        assert_eq!(pt_to_emu(0.0), 0);
        assert_eq!(pt_to_emu(1.0), 12_700);
        assert_eq!(pt_to_emu(72.0), EMUS_PER_INCH);
        assert_eq!(pt_to_emu(-2.5), -31_750);
        // 0.00004pt = 0.508 EMU
        assert_eq!(pt_to_emu(0.00004), 1);
        assert_eq!(pt_to_emu(0.00003), 0);
    }

    #[test]
    fn test_emu_str() {
        assert_eq!(emu_str(10.0), "127000");
        assert_eq!(emu_str(-1.0), "-12700");
    }

    #[test]
    fn test_degrees_to_rot() {
        assert_eq!(degrees_to_rot(0.0), 0);
        assert_eq!(degrees_to_rot(90.0), -5_400_000);
        assert_eq!(degrees_to_rot(-45.0), 2_700_000);
        assert_eq!(degrees_to_rot(1.5), -90_000);
    }

    #[test]
    fn test_font_size_rounds() {
        assert_eq!(pt_to_font_size(10.0), 1000);
        assert_eq!(pt_to_font_size(10.999), 1100);
        // 100 * 8.2 is 819.999...
        assert_eq!(pt_to_font_size(8.2), 820);
        assert_eq!(pt_to_font_size(2.3), 230);
    }

    #[test]
    fn test_inches_round_trip() {
        assert_eq!(inches_to_pt(1.0), 72.0);
    }

    proptest! {
        #[test]
        fn prop_emu_matches_rounded_product(v in -1.0e6f64..1.0e6) {
            prop_assert_eq!(pt_to_emu(v), (v * 12_700.0).round() as i64);
        }

        #[test]
        fn prop_emu_is_monotonic(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(pt_to_emu(lo) <= pt_to_emu(hi));
        }
    }
}
