//! Uniform addressing for the free tuning parameters
//!
//! The shader defines what each of `p1`..`pc` means; the host only needs a
//! way to address the twelve slots without hard-coding field names into
//! tuning UIs or parameter sweeps.

use crate::control::Control;

/// One of the twelve opaque tuning slots in [`Control`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamSlot {
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
    P7,
    P8,
    P9,
    Pa,
    Pb,
    Pc,
}

impl ParamSlot {
    /// Every slot, in field order.
    pub const ALL: [ParamSlot; 12] = [
        ParamSlot::P1,
        ParamSlot::P2,
        ParamSlot::P3,
        ParamSlot::P4,
        ParamSlot::P5,
        ParamSlot::P6,
        ParamSlot::P7,
        ParamSlot::P8,
        ParamSlot::P9,
        ParamSlot::Pa,
        ParamSlot::Pb,
        ParamSlot::Pc,
    ];

    /// Zero-based position of the slot within the parameter block.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl Control {
    /// Read one tuning slot.
    pub fn param(&self, slot: ParamSlot) -> f32 {
        match slot {
            ParamSlot::P1 => self.p1,
            ParamSlot::P2 => self.p2,
            ParamSlot::P3 => self.p3,
            ParamSlot::P4 => self.p4,
            ParamSlot::P5 => self.p5,
            ParamSlot::P6 => self.p6,
            ParamSlot::P7 => self.p7,
            ParamSlot::P8 => self.p8,
            ParamSlot::P9 => self.p9,
            ParamSlot::Pa => self.pa,
            ParamSlot::Pb => self.pb,
            ParamSlot::Pc => self.pc,
        }
    }

    /// Write one tuning slot.
    pub fn set_param(&mut self, slot: ParamSlot, value: f32) {
        let field = match slot {
            ParamSlot::P1 => &mut self.p1,
            ParamSlot::P2 => &mut self.p2,
            ParamSlot::P3 => &mut self.p3,
            ParamSlot::P4 => &mut self.p4,
            ParamSlot::P5 => &mut self.p5,
            ParamSlot::P6 => &mut self.p6,
            ParamSlot::P7 => &mut self.p7,
            ParamSlot::P8 => &mut self.p8,
            ParamSlot::P9 => &mut self.p9,
            ParamSlot::Pa => &mut self.pa,
            ParamSlot::Pb => &mut self.pb,
            ParamSlot::Pc => &mut self.pc,
        };
        *field = value;
    }

    /// All twelve tuning slots, in field order.
    pub fn params(&self) -> [f32; 12] {
        [
            self.p1, self.p2, self.p3, self.p4, self.p5, self.p6, self.p7, self.p8, self.p9,
            self.pa, self.pb, self.pc,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_cover_the_block_in_order() {
        assert_eq!(ParamSlot::ALL.len(), 12);
        for (i, slot) in ParamSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn set_param_lands_in_the_matching_field() {
        let mut c = Control::default();
        for (i, slot) in ParamSlot::ALL.iter().enumerate() {
            c.set_param(*slot, i as f32 + 1.0);
        }
        assert_eq!(c.p1, 1.0);
        assert_eq!(c.p9, 9.0);
        assert_eq!(c.pa, 10.0);
        assert_eq!(c.pc, 12.0);
        assert_eq!(
            c.params(),
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0]
        );
    }

    #[test]
    fn param_reads_back_what_was_written() {
        let mut c = Control::default();
        for slot in ParamSlot::ALL {
            c.set_param(slot, 0.5);
            assert_eq!(c.param(slot), 0.5);
        }
    }

    #[test]
    fn slot_writes_land_at_sequential_byte_offsets() {
        // Each slot occupies 4 bytes starting at offset 48.
        for (i, slot) in ParamSlot::ALL.iter().enumerate() {
            let mut c = Control::default();
            c.set_param(*slot, f32::from_bits(0xDEAD_BEEF));
            let bytes = c.as_bytes();
            let offset = 48 + 4 * i;
            assert_eq!(bytes[offset..offset + 4], 0xDEAD_BEEFu32.to_le_bytes());
        }
    }
}
