/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reader and writer implementations for `std::io` types
//! and their `no_std` counterparts.

#[cfg(feature = "std")]
mod std_io {
    use std::io::{ErrorKind, Read, Write};

    use crate::bytestream::{ZByteIoError, ZByteReaderTrait, ZByteWriterTrait};

    impl<T: Read> ZByteReaderTrait for T {
        fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
            // std's read_exact cannot tell us how far it got, and we
            // need that to report truncated files properly
            let mut filled = 0;

            while filled < buf.len() {
                match self.read(&mut buf[filled..]) {
                    Ok(0) => return Err(ZByteIoError::NotEnoughBytes(buf.len(), filled)),
                    Ok(n) => filled += n,
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => return Err(ZByteIoError::StdIoError(e))
                }
            }
            Ok(())
        }

        #[inline(always)]
        fn read_const_bytes<const N: usize>(
            &mut self, buf: &mut [u8; N]
        ) -> Result<(), ZByteIoError> {
            self.read_exact_bytes(buf)
        }

        fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
            loop {
                match self.read(buf) {
                    Ok(n) => return Ok(n),
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => return Err(ZByteIoError::StdIoError(e))
                }
            }
        }
    }

    impl<T: Write> ZByteWriterTrait for T {
        fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
            self.write_all(buf).map_err(ZByteIoError::StdIoError)
        }

        fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ZByteIoError> {
            self.write_all_bytes(buf)
        }

        fn flush_bytes(&mut self) -> Result<(), ZByteIoError> {
            self.flush().map_err(ZByteIoError::StdIoError)
        }

        fn reserve_capacity(&mut self, _: usize) -> Result<(), ZByteIoError> {
            // generic writers cannot pre-allocate anything
            Ok(())
        }
    }
}

// We cannot use the below impls and std ones because we'll re-implement the
// same trait for &[u8] which is blanketed by write. Ending up with two separate implementations
#[cfg(not(feature = "std"))]
mod no_std_io {
    use crate::bytestream::{ZByteIoError, ZByteWriterTrait};

    impl ZByteWriterTrait for &mut [u8] {
        fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
            if buf.len() > self.len() {
                return Err(ZByteIoError::NotEnoughBuffer(buf.len(), self.len()));
            }
            let (a, b) = core::mem::take(self).split_at_mut(buf.len());
            a.copy_from_slice(buf);
            *self = b;

            Ok(())
        }

        fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ZByteIoError> {
            self.write_all_bytes(buf)
        }

        fn flush_bytes(&mut self) -> Result<(), ZByteIoError> {
            Ok(())
        }
        fn reserve_capacity(&mut self, _: usize) -> Result<(), ZByteIoError> {
            // can't really pre-allocate anything here
            Ok(())
        }
    }

    impl ZByteWriterTrait for &mut alloc::vec::Vec<u8> {
        fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
            self.extend_from_slice(buf);
            Ok(())
        }

        fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ZByteIoError> {
            self.extend_from_slice(buf);
            Ok(())
        }
        fn flush_bytes(&mut self) -> Result<(), ZByteIoError> {
            Ok(())
        }
        fn reserve_capacity(&mut self, size: usize) -> Result<(), ZByteIoError> {
            self.reserve(size);
            Ok(())
        }
    }
}
