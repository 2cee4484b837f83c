/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use crate::bytestream::ZByteReaderTrait;

/// Errors returned by the readers and writers in this module
pub enum ZByteIoError {
    /// An error bubbled up from `std::io`
    #[cfg(feature = "std")]
    StdIoError(std::io::Error),
    /// The source ran out of bytes.
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes requested
    /// - 2nd argument is the number of bytes that were available
    NotEnoughBytes(usize, usize),
    /// The sink ran out of space.
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we wanted to write
    /// - 2nd argument is the space left in the sink
    NotEnoughBuffer(usize, usize),
    Generic(&'static str)
}

impl ZByteIoError {
    /// Return true if this error means the underlying source or sink
    /// simply ran out, as opposed to failing outright
    pub fn is_exhausted(&self) -> bool {
        match self {
            #[cfg(feature = "std")]
            ZByteIoError::StdIoError(err) => err.kind() == std::io::ErrorKind::UnexpectedEof,
            ZByteIoError::NotEnoughBytes(..) | ZByteIoError::NotEnoughBuffer(..) => true,
            ZByteIoError::Generic(_) => false
        }
    }
}

impl Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            ZByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ZByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ZByteIoError::NotEnoughBuffer(expected, found) => {
                writeln!(
                    f,
                    "Not enough buffer to write {expected} bytes, buffer size is {found}"
                )
            }
            ZByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ZByteIoError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for ZByteIoError {
    fn from(value: std::io::Error) -> Self {
        ZByteIoError::StdIoError(value)
    }
}

/// A sequential reader with endian aware reads
///
/// Wraps anything implementing [`ZByteReaderTrait`] and keeps
/// track of how many bytes have been consumed so far
pub struct ZReader<T: ZByteReaderTrait> {
    inner:    T,
    position: u64
}

impl<T: ZByteReaderTrait> ZReader<T> {
    pub fn new(source: T) -> ZReader<T> {
        ZReader {
            inner:    source,
            position: 0
        }
    }
    /// Number of bytes successfully consumed from the source
    #[inline(always)]
    pub const fn position(&self) -> u64 {
        self.position
    }

    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, ZByteIoError> {
        let mut buf = [0];
        self.read_fixed_into(&mut buf)?;
        Ok(buf[0])
    }

    #[inline(always)]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ZByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        self.read_fixed_into(&mut byte_store)?;
        Ok(byte_store)
    }

    #[inline(always)]
    fn read_fixed_into<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ZByteIoError> {
        self.inner.read_const_bytes(buf)?;
        self.position += N as u64;
        Ok(())
    }

    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        self.inner.read_exact_bytes(buf)?;
        self.position += buf.len() as u64;
        Ok(())
    }

    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        let bytes_read = self.inner.read_bytes(buf)?;
        self.position += bytes_read as u64;
        Ok(bytes_read)
    }
}

macro_rules! get_single_type {
    ($name:tt,$int_type:tt) => {
        impl<T: ZByteReaderTrait> ZReader<T> {
            #[doc=concat!("Read ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name(&mut self) -> Result<$int_type, ZByteIoError> {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let mut space = [0; SIZE_OF_VAL];
                self.read_fixed_into(&mut space)?;

                Ok($int_type::from_le_bytes(space))
            }
        }
    };
}

get_single_type!(get_u16_le_err, u16);
