/**
 * MIT License
 *
 * mp3tag - Copyright (c) 2021 Larry Hao
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */
use crate::error::{Result, TagError};
use crate::header::HEADER_SIZE;
use crate::tag::{Id3Tag, TagField};

use std::borrow::Cow;
use std::io::{ErrorKind, Read, Write};

use byteorder::{BigEndian, ByteOrder, WriteBytesExt};

/// A single frame as found in the tag: identifier and raw payload
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub id: [u8; 4],
    pub content: Vec<u8>,
}

impl Frame {
    /// The field this frame holds, if it is one we keep
    pub fn field(&self) -> Option<TagField> {
        TagField::from_frame_id(&self.id)
    }

    /// Bytes this frame occupies in the tag, header included
    pub fn encoded_len(&self) -> u64 {
        HEADER_SIZE as u64 + self.content.len() as u64
    }

    pub fn id_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.id)
    }
}

/// Outcome of decoding one frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameRead {
    Frame(Frame),
    /// An all-zero identifier, the rest of the tag is padding
    Padding,
    /// No bytes left at a frame boundary
    Eof,
    /// The header or the payload ended early, nothing after this can be trusted
    Truncated,
}

/// Decode the frame at the current position of `reader`
///
/// The size is read as a plain big-endian integer for every tag version,
/// ID3v2.4 sync-safe frame sizes are not supported.
pub fn read_frame<R>(reader: &mut R) -> Result<FrameRead>
where
    R: Read,
{
    let mut header = [0; HEADER_SIZE];
    let filled = read_up_to(reader, &mut header)?;

    if filled >= 4 && header[..4] == [0; 4] {
        return Ok(FrameRead::Padding);
    }

    match filled {
        0 => return Ok(FrameRead::Eof),
        HEADER_SIZE => {}
        _ => return Ok(FrameRead::Truncated),
    }

    let id = [header[0], header[1], header[2], header[3]];
    let size = BigEndian::read_u32(&header[4..8]);
    // header[8..] holds the flags, which are not interpreted

    // Read through `take` so a bogus size can't make us allocate it all up front
    let mut content = Vec::new();
    reader
        .by_ref()
        .take(u64::from(size))
        .read_to_end(&mut content)?;

    if content.len() as u64 != u64::from(size) {
        return Ok(FrameRead::Truncated);
    }

    Ok(FrameRead::Frame(Frame { id, content }))
}

/// Fill as much of `buf` as `reader` allows, returning the number of bytes read
fn read_up_to<R>(reader: &mut R, buf: &mut [u8]) -> Result<usize>
where
    R: Read,
{
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(TagError::Io(e)),
        }
    }

    Ok(filled)
}

/// Encode one frame, writing nothing if `content` is `None`
///
/// Returns the number of bytes written.
pub fn write_frame<W>(writer: &mut W, id: &[u8; 4], content: Option<&[u8]>) -> Result<u64>
where
    W: Write,
{
    let Some(content) = content else {
        return Ok(0);
    };

    let len = u32::try_from(content.len()).map_err(|_| TagError::TooMuchData)?;

    writer.write_all(id)?;
    writer.write_u32::<BigEndian>(len)?;
    writer.write_u16::<BigEndian>(0)?;
    writer.write_all(content)?;

    Ok(HEADER_SIZE as u64 + u64::from(len))
}

/// Encode every set field of `tag`, in the fixed frame order
pub fn write_frames<W>(writer: &mut W, tag: &Id3Tag) -> Result<u64>
where
    W: Write,
{
    let mut written = 0;
    for field in TagField::ALL {
        written += write_frame(writer, field.frame_id(), tag.get(field))?;
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw_frame(id: &[u8; 4], declared: u32, content: &[u8]) -> Vec<u8> {
        let mut bytes = id.to_vec();
        bytes.extend_from_slice(&declared.to_be_bytes());
        bytes.extend_from_slice(&[0, 0]);
        bytes.extend_from_slice(content);
        bytes
    }

    #[test]
    fn encode_frame_layout() {
        let mut out: Vec<u8> = Vec::new();
        let written = write_frame(&mut out, b"TIT2", Some(&b"Hello"[..])).unwrap();

        assert_eq!(written, 15);
        assert_eq!(
            out,
            [b'T', b'I', b'T', b'2', 0, 0, 0, 5, 0, 0, b'H', b'e', b'l', b'l', b'o']
        );
    }

    #[test]
    fn absent_content_writes_nothing() {
        let mut out: Vec<u8> = Vec::new();
        assert_eq!(write_frame(&mut out, b"TALB", None).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn empty_content_still_writes_a_frame() {
        let mut out: Vec<u8> = Vec::new();
        assert_eq!(write_frame(&mut out, b"TYER", Some(&b""[..])).unwrap(), 10);
        assert_eq!(out, raw_frame(b"TYER", 0, b""));
    }

    #[test]
    fn frames_are_written_in_fixed_order() {
        let mut tag = Id3Tag::new();
        tag.set_genre("g");
        tag.set_title("t");

        let mut out: Vec<u8> = Vec::new();
        let written = write_frames(&mut out, &tag).unwrap();

        let mut expected = raw_frame(b"TIT2", 1, b"t");
        expected.extend(raw_frame(b"TCON", 1, b"g"));
        assert_eq!(written, 22);
        assert_eq!(out, expected);
    }

    #[test]
    fn decode_frame() {
        let bytes = raw_frame(b"TPE1", 6, b"artist");
        let read = read_frame(&mut &bytes[..]).unwrap();

        let frame = match read {
            FrameRead::Frame(frame) => frame,
            other => panic!("expected a frame, got {other:?}"),
        };
        assert_eq!(frame.field(), Some(TagField::Artist));
        assert_eq!(frame.content, b"artist");
        assert_eq!(frame.encoded_len(), 16);
    }

    #[test]
    fn size_is_plain_big_endian() {
        // 0x0000_0100 would be 128 if it were sync-safe
        let content = vec![b'x'; 256];
        let bytes = raw_frame(b"COMM", 256, &content);
        let read = read_frame(&mut &bytes[..]).unwrap();

        assert_eq!(
            read,
            FrameRead::Frame(Frame {
                id: *b"COMM",
                content,
            })
        );
    }

    #[test]
    fn unknown_frame_is_consumed() {
        let mut bytes = raw_frame(b"APIC", 3, b"abc");
        bytes.extend(raw_frame(b"TALB", 1, b"a"));
        let mut reader = &bytes[..];

        let FrameRead::Frame(first) = read_frame(&mut reader).unwrap() else {
            panic!("expected a frame");
        };
        assert_eq!(first.field(), None);
        assert_eq!(first.id_str(), "APIC");

        let FrameRead::Frame(second) = read_frame(&mut reader).unwrap() else {
            panic!("expected a frame");
        };
        assert_eq!(second.field(), Some(TagField::Album));
    }

    #[test]
    fn zero_identifier_is_padding() {
        let bytes = [0_u8; 32];
        assert_eq!(read_frame(&mut &bytes[..]).unwrap(), FrameRead::Padding);
    }

    #[test]
    fn end_of_input() {
        assert_eq!(read_frame(&mut &b""[..]).unwrap(), FrameRead::Eof);
    }

    #[test]
    fn truncated_payload() {
        let bytes = raw_frame(b"TIT2", 100, &[b'a'; 40]);
        assert_eq!(read_frame(&mut &bytes[..]).unwrap(), FrameRead::Truncated);
    }

    #[test]
    fn truncated_header() {
        let bytes = b"TIT2\x00\x00";
        assert_eq!(read_frame(&mut &bytes[..]).unwrap(), FrameRead::Truncated);
    }
}
