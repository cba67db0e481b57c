//! Resizing-constraint decoding.
//!
//! The export encodes constraints as a 6-bit mask with inverted semantics: a
//! cleared bit means the corresponding edge or dimension is pinned. Reading the
//! mask as a zero-padded binary string, the positions are
//! `top, height, bottom, left, width, right` from most to least significant
//! bit. That mapping is part of the external format and is preserved here as
//! direct bitwise tests.

use dtc_core::{Constraints, UNCONSTRAINED_MASK};

use crate::error::{Result, SketchError};

const TOP: u32 = 0b10_0000;
const HEIGHT: u32 = 0b01_0000;
const BOTTOM: u32 = 0b00_1000;
const LEFT: u32 = 0b00_0100;
const WIDTH: u32 = 0b00_0010;
const RIGHT: u32 = 0b00_0001;

/// Decode a raw resizing-constraint mask.
///
/// Deterministic over the whole value space 0..=63; anything larger is
/// rejected instead of being read as undefined extra bits.
pub fn decode(mask: u32) -> Result<Constraints> {
    if mask > UNCONSTRAINED_MASK {
        return Err(SketchError::InvalidConstraintMask { value: mask });
    }
    Ok(Constraints {
        none: mask == UNCONSTRAINED_MASK,
        top: mask & TOP == 0,
        height: mask & HEIGHT == 0,
        bottom: mask & BOTTOM == 0,
        left: mask & LEFT == 0,
        width: mask & WIDTH == 0,
        right: mask & RIGHT == 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconstrained_mask_sets_only_none() {
        let c = decode(63).unwrap();
        assert!(c.none);
        assert!(!c.top && !c.right && !c.bottom && !c.left && !c.width && !c.height);
    }

    #[test]
    fn zero_mask_pins_everything() {
        let c = decode(0).unwrap();
        assert!(!c.none);
        assert!(c.top && c.right && c.bottom && c.left && c.width && c.height);
    }

    #[test]
    fn each_bit_maps_to_its_flag() {
        // Clearing exactly one bit activates exactly one flag.
        let cases = [
            (TOP, "top"),
            (HEIGHT, "height"),
            (BOTTOM, "bottom"),
            (LEFT, "left"),
            (WIDTH, "width"),
            (RIGHT, "right"),
        ];
        for (bit, label) in cases {
            let c = decode(UNCONSTRAINED_MASK & !bit).unwrap();
            let flags = [c.top, c.height, c.bottom, c.left, c.width, c.right];
            assert_eq!(
                flags.iter().filter(|f| **f).count(),
                1,
                "mask without {label} bit should activate one flag"
            );
            assert!(!c.none);
        }
        // Spot-check the mapping direction itself.
        assert!(decode(UNCONSTRAINED_MASK & !TOP).unwrap().top);
        assert!(decode(UNCONSTRAINED_MASK & !RIGHT).unwrap().right);
    }

    #[test]
    fn decoding_is_pure() {
        for mask in 0..=63 {
            assert_eq!(decode(mask).unwrap(), decode(mask).unwrap());
        }
    }

    #[test]
    fn out_of_range_mask_is_rejected() {
        assert!(matches!(
            decode(64),
            Err(SketchError::InvalidConstraintMask { value: 64 })
        ));
    }
}
