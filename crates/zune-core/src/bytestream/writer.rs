/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::mem::size_of;

use crate::bytestream::{ZByteIoError, ZByteWriterTrait};

/// Encapsulates a simple Byte writer with
/// support for Endian aware writes
///
/// Every write goes straight to the underlying sink, the
/// writer only keeps count of how many bytes went through it
pub struct ZWriter<T: ZByteWriterTrait> {
    buffer:        T,
    bytes_written: usize
}

impl<T: ZByteWriterTrait> ZWriter<T> {
    /// Create a new writer for the sink
    pub fn new(data: T) -> ZWriter<T> {
        ZWriter {
            buffer:        data,
            bytes_written: 0
        }
    }
    /// Return the number of bytes the writer has written
    ///
    /// ```
    /// use zune_core::bytestream::ZWriter;
    /// let mut sink = vec![];
    /// let mut stream = ZWriter::new(&mut sink);
    /// stream.write_all(&[1, 2, 3]).unwrap();
    /// assert_eq!(stream.bytes_written(), 3);
    /// ```
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }
    /// Tell the sink how many bytes are about to come
    pub fn reserve(&mut self, additional: usize) -> Result<(), ZByteIoError> {
        self.buffer.reserve_capacity(additional)
    }
    /// Write all bytes in `buf` or error out
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        self.buffer.write_all_bytes(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }
    /// Write a fixed size array into the sink or error out
    pub fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ZByteIoError> {
        self.buffer.write_const_bytes(buf)?;
        self.bytes_written += N;
        Ok(())
    }
    /// Write a single byte into the bytestream or error out
    /// if the sink cannot take it
    pub fn write_u8_err(&mut self, byte: u8) -> Result<(), ZByteIoError> {
        self.write_const_bytes(&[byte])
    }
    /// Flush the underlying sink
    pub fn flush(&mut self) -> Result<(), ZByteIoError> {
        self.buffer.flush_bytes()
    }
}

macro_rules! write_single_type {
    ($name:tt,$int_type:tt) => {
        impl<T: ZByteWriterTrait> ZWriter<T> {
            #[doc=concat!("Write ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning an error if the underlying sink cannot support a ",stringify!($int_type)," write.")]
            #[inline]
            pub fn $name(&mut self, value: $int_type) -> Result<(), ZByteIoError> {
                const SIZE: usize = size_of::<$int_type>();

                let bytes: [u8; SIZE] = value.to_le_bytes();
                self.write_const_bytes(&bytes)
            }
        }
    };
}

write_single_type!(write_u16_le_err, u16);

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::bytestream::ZWriter;

    #[test]
    fn little_endian_writes() {
        let mut sink = Vec::new();
        let mut writer = ZWriter::new(&mut sink);

        writer.write_u16_le_err(0x0201).unwrap();
        writer.write_u8_err(3).unwrap();
        writer.write_const_bytes(&[4, 5]).unwrap();

        assert_eq!(writer.bytes_written(), 5);
        assert_eq!(sink, [1, 2, 3, 4, 5]);
    }
}
