use std::io::{BufWriter, Read, Result};

use bitstream_io::{BitWrite, BitWriter, LittleEndian};

/// Decides how one hidden bit is pulled out of a carrier byte.
pub trait UnveilAlgorithm {
    fn decode(&self, carrier: u8) -> bool;
}

/// Default 1 bit unveil strategy.
#[derive(Debug, Default)]
pub struct OneBitUnveil;

impl UnveilAlgorithm for OneBitUnveil {
    #[inline(always)]
    fn decode(&self, carrier: u8) -> bool {
        (carrier & 0x1) > 0
    }
}

/// Assembles the hidden bits of payload carrier bytes back into bytes.
///
/// One bit per carrier byte, least-significant bit first. Trailing bits
/// that do not fill a whole byte are dropped.
pub struct PayloadDecoder<I, A>
where
    I: Iterator<Item = u8>,
    A: UnveilAlgorithm,
{
    pub input: I,
    pub algorithm: A,
}

impl<I, A> PayloadDecoder<I, A>
where
    I: Iterator<Item = u8>,
    A: UnveilAlgorithm,
{
    pub fn new(input: I, algorithm: A) -> Self {
        PayloadDecoder { input, algorithm }
    }
}

impl<I, A> Read for PayloadDecoder<I, A>
where
    I: Iterator<Item = u8>,
    A: UnveilAlgorithm,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        // 1 bit per carrier byte
        let items_to_take = buf.len() << 3;
        let buf_writer = BufWriter::new(buf);
        let mut bit_buffer = BitWriter::endian(buf_writer, LittleEndian);

        let mut bits_read = 0;
        for carrier in self.input.by_ref().take(items_to_take) {
            let bit = self.algorithm.decode(carrier);
            bit_buffer.write_bit(bit).expect("Cannot write bit n");
            bits_read += 1;
        }

        if !bit_buffer.byte_aligned() {
            bit_buffer
                .byte_align()
                .expect("Failed to align the last byte read from carrier.");
        }

        Ok(bits_read >> 3)
    }
}
