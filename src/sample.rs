//! Axis decoding and scaling.
//!
//! The output block holds three left-justified two's-complement words, each
//! sent low byte first:
//!
//! ```text
//! 0x28 OUT_X_L | 0x29 OUT_X_H | 0x2A OUT_Y_L | 0x2B OUT_Y_H | 0x2C OUT_Z_L | 0x2D OUT_Z_H
//! ```

use crate::params::FullScale;

/// Number of consecutive bytes spanning X, Y, Z axis samples.
pub const RAW_AXIS_BYTES: usize = 6;

/// Input domain handed to [`map_range`], stated max-to-min.
const RAW_DOMAIN: (f32, f32) = (i16::MAX as f32, i16::MIN as f32);

/// Acceleration along each axis in g.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Acceleration {
    /// X axis, g.
    pub x: f32,
    /// Y axis, g.
    pub y: f32,
    /// Z axis, g.
    pub z: f32,
}

/// Reassembles one axis from its low and high register bytes.
#[inline]
pub fn unpack_axis(low: u8, high: u8) -> i16 {
    (((high as u16) << 8) | low as u16) as i16
}

/// Splits the raw axis block into signed `[x, y, z]` codes.
pub fn unpack_xyz(raw: &[u8; RAW_AXIS_BYTES]) -> [i16; 3] {
    [
        unpack_axis(raw[0], raw[1]),
        unpack_axis(raw[2], raw[3]),
        unpack_axis(raw[4], raw[5]),
    ]
}

/// Linearly maps `value` from `input` onto `output`.
///
/// Each range is normalised to (min, max) first and `value` is clamped into
/// the input range, so the endpoint order of either pair does not matter.
pub fn map_range(value: f32, input: (f32, f32), output: (f32, f32)) -> f32 {
    let (in_lo, in_hi) = ordered(input);
    let (out_lo, out_hi) = ordered(output);
    let clamped = value.clamp(in_lo, in_hi);
    (clamped - in_lo) * (out_hi - out_lo) / (in_hi - in_lo) + out_lo
}

fn ordered((a, b): (f32, f32)) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Scales one signed axis code to g for the given full-scale setting.
pub fn scale_axis(raw: i16, full_scale: FullScale) -> f32 {
    let limit = full_scale.limit_g();
    map_range(raw as f32, RAW_DOMAIN, (-limit, limit))
}

impl Acceleration {
    /// Scales a signed `[x, y, z]` triplet to g.
    pub fn from_raw(raw: [i16; 3], full_scale: FullScale) -> Self {
        Self {
            x: scale_axis(raw[0], full_scale),
            y: scale_axis(raw[1], full_scale),
            z: scale_axis(raw[2], full_scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALES: [FullScale; 4] = [FullScale::G2, FullScale::G4, FullScale::G8, FullScale::G16];

    fn approx(actual: f32, expected: f32) -> bool {
        (actual - expected).abs() < 1e-3
    }

    #[test]
    fn axis_bytes_are_low_then_high() {
        assert_eq!(unpack_axis(0x00, 0x40), 16_384);
        assert_eq!(unpack_axis(0xF0, 0xFF), -16);
        assert_eq!(unpack_axis(0x00, 0x80), i16::MIN);
        assert_eq!(unpack_axis(0xFF, 0x7F), i16::MAX);
    }

    #[test]
    fn block_order_is_x_y_z() {
        let raw = [0x10, 0x01, 0x20, 0x02, 0x30, 0x03];
        assert_eq!(unpack_xyz(&raw), [0x0110, 0x0220, 0x0330]);
    }

    #[test]
    fn extremes_map_to_full_scale_limits() {
        for scale in SCALES {
            let limit = scale.limit_g();
            assert_eq!(scale_axis(i16::MAX, scale), limit);
            assert_eq!(scale_axis(i16::MIN, scale), -limit);
        }
    }

    #[test]
    fn zero_maps_to_roughly_zero() {
        for scale in SCALES {
            assert!(approx(scale_axis(0, scale), 0.0));
        }
    }

    #[test]
    fn mapping_increases_with_raw_code() {
        assert!(scale_axis(1_000, FullScale::G2) > scale_axis(-1_000, FullScale::G2));
        assert!(scale_axis(-16_384, FullScale::G4) < 0.0);
    }

    #[test]
    fn quarter_code_at_two_g_is_one_g() {
        let raw = [0x00, 0x40, 0x00, 0xC0, 0x00, 0x00];
        let accel = Acceleration::from_raw(unpack_xyz(&raw), FullScale::G2);
        assert!(approx(accel.x, 1.0));
        assert!(approx(accel.y, -1.0));
        assert!(approx(accel.z, 0.0));
    }

    #[test]
    fn map_range_accepts_either_endpoint_order() {
        assert_eq!(map_range(5.0, (0.0, 10.0), (0.0, 100.0)), 50.0);
        assert_eq!(map_range(5.0, (10.0, 0.0), (100.0, 0.0)), 50.0);
        assert_eq!(map_range(20.0, (0.0, 10.0), (0.0, 1.0)), 1.0);
    }
}
