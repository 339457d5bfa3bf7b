//! The 10 byte header in front of every ID3v2 tag
//!
//! ```text
//! "ID3" | major | minor | flags | size (4 bytes, sync-safe)
//! ```
//!
//! The size counts the bytes *after* the header and is stored with 7 bits per
//! byte, so it can never contain a frame sync pattern.

use crate::error::{Result, TagError};

use std::io::{ErrorKind, Read};

use byteorder::{BigEndian, ByteOrder};

/// Length of the tag header, and of every frame header
pub const HEADER_SIZE: usize = 10;
/// The largest size a sync-safe integer can hold, 2^28 - 1
pub const MAX_TAG_SIZE: u32 = 0x0FFF_FFFF;

const MARKER: &[u8; 3] = b"ID3";

/// Header written in front of a file that had no tag yet, ID3v2.3.0 without flags
pub(crate) const FRESH_HEADER: [u8; HEADER_SIZE] = [b'I', b'D', b'3', 3, 0, 0, 0, 0, 0, 0];

/// Decode a sync-safe integer, only the low 7 bits of every byte count
pub fn unsynch_u32(n: u32) -> u32 {
    let n = n & 0x7F7F_7F7F;
    n & 0x7F | (n & 0x7F00) >> 1 | (n & 0x7F_0000) >> 2 | (n & 0x7F00_0000) >> 3
}

/// Encode `n` as a sync-safe integer
pub fn synch_u32(n: u32) -> Result<u32> {
    if n > MAX_TAG_SIZE {
        return Err(TagError::TooMuchData);
    }

    let mut x: u32 = n & 0x7F | (n & 0xFFFF_FF80) << 1;
    x = x & 0x7FFF | (x & 0xFFFF_8000) << 1;
    x = x & 0x7F_FFFF | (x & 0xFF80_0000) << 1;
    Ok(x)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagHeader {
    pub major: u8,
    pub minor: u8,
    /// Kept as found, none of the flags are interpreted
    pub flags: u8,
    /// Size of the tag excluding this header
    pub size: u32,
}

impl TagHeader {
    /// Read and parse the first 10 bytes of `reader`
    pub fn read<R>(reader: &mut R) -> Result<Self>
    where
        R: Read,
    {
        Self::parse(read_raw_header(reader)?)
    }

    pub fn parse(header: [u8; HEADER_SIZE]) -> Result<Self> {
        if &header[..3] != MARKER {
            return Err(TagError::NoTagPresent);
        }

        Ok(Self {
            major: header[3],
            minor: header[4],
            flags: header[5],
            size: unsynch_u32(BigEndian::read_u32(&header[6..])),
        })
    }

    /// Human readable revision, e.g. `ID3v2.4.0`
    pub fn version_string(&self) -> String {
        format!("ID3v2.{}.{}", self.major, self.minor)
    }

    /// Offset of the first byte after the tag, counted from the start of the file
    pub fn tag_end(&self) -> u64 {
        HEADER_SIZE as u64 + u64::from(self.size)
    }
}

/// Read the raw header bytes, failing with [`TagError::TruncatedHeader`] if there are fewer than 10
pub(crate) fn read_raw_header<R>(reader: &mut R) -> Result<[u8; HEADER_SIZE]>
where
    R: Read,
{
    let mut header = [0; HEADER_SIZE];
    reader.read_exact(&mut header).map_err(|e| {
        if e.kind() == ErrorKind::UnexpectedEof {
            TagError::TruncatedHeader
        } else {
            TagError::Io(e)
        }
    })?;

    Ok(header)
}
