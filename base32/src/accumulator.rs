/// Transient bit register shared by the encoder and the decoder.
///
/// Holds at most 12 bits: the encoder refills below 5 bits with 8 more, the
/// decoder drains at 8 bits after adding 5.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct BitAccumulator {
    buffer: u32,
    bits: u32,
}

impl BitAccumulator {
    const MASK: u32 = 0xfff;

    /// Shifts `width` low bits of `value` in at the bottom.
    #[inline]
    pub(crate) fn push(&mut self, value: u32, width: u32) {
        self.buffer = ((self.buffer << width) | value) & Self::MASK;
        self.bits += width;
    }

    /// Removes and returns the top `width` bits.
    #[inline]
    pub(crate) fn take(&mut self, width: u32) -> u32 {
        debug_assert!(width <= self.bits);
        self.bits -= width;
        (self.buffer >> self.bits) & ((1 << width) - 1)
    }

    #[inline]
    pub(crate) fn bits(&self) -> u32 {
        self.bits
    }
}
