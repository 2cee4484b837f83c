/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ZByteIoError, ZByteReaderTrait};

/// A cursor over an in memory buffer
///
/// This is the preferred reader for data already in memory,
/// reads are plain slice copies.
///
/// # Example
/// ```
/// use zune_core::bytestream::{ZCursor, ZReader};
/// let mut reader = ZReader::new(ZCursor::new([1_u8, 0]));
/// assert_eq!(reader.get_u16_le_err().unwrap(), 1);
/// ```
pub struct ZCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ZCursor<T> {
    pub fn new(buffer: T) -> ZCursor<T> {
        ZCursor {
            stream:   buffer,
            position: 0
        }
    }
    /// Bytes that have not yet been read
    #[inline]
    pub fn remaining(&self) -> usize {
        self.stream.as_ref().len().saturating_sub(self.position)
    }
    /// Current offset of the cursor
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl<T: AsRef<[u8]>> ZByteReaderTrait for ZCursor<T> {
    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        let available = self.remaining();

        if available < buf.len() {
            // do not move, the caller decides what to do with a short source
            return Err(ZByteIoError::NotEnoughBytes(buf.len(), available));
        }
        let end = self.position + buf.len();
        buf.copy_from_slice(&self.stream.as_ref()[self.position..end]);
        self.position = end;

        Ok(())
    }

    #[inline(always)]
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ZByteIoError> {
        self.read_exact_bytes(buf)
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        let bytes_read = buf.len().min(self.remaining());
        let end = self.position + bytes_read;

        buf[..bytes_read].copy_from_slice(&self.stream.as_ref()[self.position..end]);
        self.position = end;

        Ok(bytes_read)
    }
}

#[cfg(test)]
mod tests {
    use crate::bytestream::{ZByteIoError, ZByteReaderTrait, ZCursor};

    #[test]
    fn short_read_does_not_advance() {
        let mut cursor = ZCursor::new([1_u8, 2, 3]);
        let mut buf = [0; 4];

        match cursor.read_exact_bytes(&mut buf) {
            Err(ZByteIoError::NotEnoughBytes(4, 3)) => (),
            _ => panic!("Expected a short read")
        }
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read_bytes(&mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], &[1, 2, 3]);
        assert_eq!(cursor.remaining(), 0);
    }
}
