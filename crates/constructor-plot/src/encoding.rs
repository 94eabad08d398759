//! Effect-to-marker mapping.
//!
//! Positive effects are green, negative red, and zero black. Marker size
//! is the effect magnitude times [`SIZE_SCALE`], except for zero, which
//! gets a fixed [`ZERO_EFFECT_SIZE`].

/// Marker area per unit of effect magnitude.
pub const SIZE_SCALE: f64 = 100.0;

/// Marker area for a constructor with no effect.
pub const ZERO_EFFECT_SIZE: f64 = 1.0;

/// Point colour key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointColor {
    /// Positive effect.
    Green,
    /// Negative effect.
    Red,
    /// No effect.
    Black,
}

impl PointColor {
    /// Lowercase colour name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Black => "black",
        }
    }
}

/// Colour and area of one scatter marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Colour key.
    pub color: PointColor,
    /// Marker area in square points.
    pub size: f64,
}

/// Map an effect value to its marker.
pub const fn encode_effect(value: f64) -> Marker {
    if value > 0.0 {
        Marker {
            color: PointColor::Green,
            size: value * SIZE_SCALE,
        }
    } else if value < 0.0 {
        Marker {
            color: PointColor::Red,
            size: value.abs() * SIZE_SCALE,
        }
    } else {
        Marker {
            color: PointColor::Black,
            size: ZERO_EFFECT_SIZE,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn assert_size(marker: Marker, expected: f64) {
        assert!(
            (marker.size - expected).abs() < 1e-9,
            "size {} != {expected}",
            marker.size
        );
    }

    #[test]
    fn positive_effect_is_green_and_scaled() {
        let m = encode_effect(3.0);
        assert_eq!(m.color, PointColor::Green);
        assert_size(m, 300.0);
    }

    #[test]
    fn negative_effect_is_red_and_scaled_by_magnitude() {
        let m = encode_effect(-2.0);
        assert_eq!(m.color, PointColor::Red);
        assert_size(m, 200.0);
    }

    #[test]
    fn zero_effect_is_black_with_fixed_size() {
        let m = encode_effect(0.0);
        assert_eq!(m.color, PointColor::Black);
        assert_size(m, 1.0);
    }

    #[test]
    fn negative_zero_counts_as_zero() {
        assert_eq!(encode_effect(-0.0).color, PointColor::Black);
    }

    #[test]
    fn tiny_effects_keep_their_sign() {
        assert_eq!(encode_effect(1e-9).color, PointColor::Green);
        assert_eq!(encode_effect(-1e-9).color, PointColor::Red);
    }
}
