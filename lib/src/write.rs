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
use crate::config::TagOptions;
use crate::error::{Result, TagError};
use crate::frame::write_frames;
use crate::header::{read_raw_header, synch_u32, TagHeader, FRESH_HEADER, HEADER_SIZE};
use crate::tag::Id3Tag;
use crate::utils::get_parent_folder;

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Cursor, Read, Seek, SeekFrom, Write};
use std::path::Path;

use byteorder::{BigEndian, WriteBytesExt};
use tempfile::{NamedTempFile, PersistError};

/// Replace the tag of the file at `path` with `tag`
///
/// The whole file is rewritten into a temporary file next to it, which then
/// replaces the original in a single rename. If anything fails before that
/// the original is left untouched. If the rename itself fails, the temporary
/// file is kept and its location logged.
pub fn write_to_path<P: AsRef<Path>>(path: P, tag: &Id3Tag, options: &TagOptions) -> Result<()> {
    let path = path.as_ref();
    options.check_extension(path)?;

    let source = File::open(path)?;
    let permissions = source.metadata()?.permissions();

    let mut temp = NamedTempFile::new_in(get_parent_folder(path))?;
    debug!("staging {} in {}", path.display(), temp.path().display());

    {
        let mut reader = BufReader::new(source);
        let mut writer = BufWriter::new(temp.as_file_mut());
        write_to(&mut reader, &mut writer, tag)?;
        writer.flush()?;
    }
    temp.as_file().sync_all()?;
    fs::set_permissions(temp.path(), permissions)?;

    temp.persist(path).map_err(|PersistError { error: err, file }| {
        match file.keep() {
            Ok((_, kept)) => error!(
                "failed to replace {}, the new file is kept at {}",
                path.display(),
                kept.display()
            ),
            Err(e) => error!("failed to replace {}, and to keep the new file: {e}", path.display()),
        }
        TagError::Io(err)
    })?;

    info!("wrote tag to {}", path.display());
    Ok(())
}

/// Write `source` to `dest` with its tag replaced by `tag`
///
/// The header of `source` is copied, apart from the size which is updated
/// for the new frames. Everything after the old tag, as given by its declared
/// size, is copied as is. A `source` without a tag gets a new ID3v2.3.0 header
/// and is copied in full.
pub fn write_to<R, W>(source: &mut R, dest: &mut W, tag: &Id3Tag) -> Result<()>
where
    R: Read + Seek,
    W: Write,
{
    let raw = read_raw_header(source)?;
    let (header, payload_start) = match TagHeader::parse(raw) {
        Ok(old) => {
            debug!("replacing {} tag of {} bytes", old.version_string(), old.size);
            (raw, old.tag_end())
        }
        Err(TagError::NoTagPresent) => {
            warn!("no ID3 tag found, adding a new one in front of the audio data");
            (FRESH_HEADER, 0)
        }
        Err(e) => return Err(e),
    };

    let id3v2 = create_tag(header, tag)?;
    dest.write_all(&id3v2)?;

    source.seek(SeekFrom::Start(payload_start))?;
    let copied = std::io::copy(source, dest)?;
    debug!("copied {copied} bytes of audio data");

    Ok(())
}

fn create_tag(header: [u8; HEADER_SIZE], tag: &Id3Tag) -> Result<Vec<u8>> {
    let mut id3v2 = Cursor::new(Vec::new());
    id3v2.write_all(&header)?;

    let len = write_frames(&mut id3v2, tag)?;
    let len = u32::try_from(len).map_err(|_| TagError::TooMuchData)?;

    // Go back and write the size of the new frames
    id3v2.seek(SeekFrom::Start(6))?;
    id3v2.write_u32::<BigEndian>(synch_u32(len)?)?;

    Ok(id3v2.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read::read_from;
    use crate::tag::TagField;
    use pretty_assertions::assert_eq;

    const AUDIO: &[u8] = b"\xFF\xFB\x90\x64audio frames";

    fn tagged(frames: &[u8]) -> Vec<u8> {
        let mut bytes = vec![b'I', b'D', b'3', 4, 0, 0x00];
        bytes.extend_from_slice(&synch_u32(frames.len() as u32).unwrap().to_be_bytes());
        bytes.extend_from_slice(frames);
        bytes.extend_from_slice(AUDIO);
        bytes
    }

    fn rewrite(source: &[u8], tag: &Id3Tag) -> Vec<u8> {
        let mut out = Vec::new();
        write_to(&mut Cursor::new(source), &mut out, tag).unwrap();
        out
    }

    #[test]
    fn copies_header_and_updates_size() {
        let mut tag = Id3Tag::new();
        tag.set_title("abc");

        let out = rewrite(&tagged(&[]), &tag);
        assert_eq!(&out[..6], &[b'I', b'D', b'3', 4, 0, 0][..]);
        assert_eq!(&out[6..10], &[0, 0, 0, 13][..]);
        assert_eq!(&out[10..23], b"TIT2\x00\x00\x00\x03\x00\x00abc");
        assert_eq!(&out[23..], AUDIO);
    }

    #[test]
    fn audio_survives_shorter_and_longer_tags() {
        let mut old = Id3Tag::new();
        old.set_title("a fairly long title to start with");
        old.set_comment("and a comment");
        let original = rewrite(&tagged(&[]), &old);

        let mut shorter = Id3Tag::new();
        shorter.set_title("x");
        let out = rewrite(&original, &shorter);
        assert!(out.ends_with(AUDIO));
        assert_eq!(out.len(), HEADER_SIZE + 11 + AUDIO.len());

        let mut longer = old.clone();
        longer.set_genre("a genre that was not there before");
        let out = rewrite(&original, &longer);
        assert!(out.ends_with(AUDIO));

        let mut reread = read_from(&mut &out[..]).unwrap();
        reread.version = None;
        assert_eq!(reread, longer);
    }

    #[test]
    fn unknown_frames_are_dropped() {
        let mut frames = b"APIC\x00\x00\x00\x04\x00\x00\x89PNG".to_vec();
        frames.extend_from_slice(b"TALB\x00\x00\x00\x01\x00\x00a");
        let source = tagged(&frames);

        let tag = read_from(&mut &source[..]).unwrap();
        let out = rewrite(&source, &tag);

        assert_eq!(&out[10..21], b"TALB\x00\x00\x00\x01\x00\x00a");
        assert_eq!(&out[21..], AUDIO);
    }

    #[test]
    fn empty_tag_writes_no_frames() {
        let out = rewrite(&tagged(b"TIT2\x00\x00\x00\x01\x00\x00t"), &Id3Tag::new());
        assert_eq!(&out[6..10], &[0, 0, 0, 0][..]);
        assert_eq!(&out[10..], AUDIO);
        assert!(read_from(&mut &out[..]).unwrap().is_empty());
    }

    #[test]
    fn untagged_source_gets_new_header() {
        let mut tag = Id3Tag::new();
        tag.set(TagField::Year, "1984");

        let out = rewrite(AUDIO, &tag);
        assert_eq!(&out[..6], &[b'I', b'D', b'3', 3, 0, 0][..]);
        assert!(out.ends_with(AUDIO));
        assert_eq!(out.len(), HEADER_SIZE + 14 + AUDIO.len());
        assert_eq!(read_from(&mut &out[..]).unwrap().year().as_deref(), Some("1984"));
    }

    #[test]
    fn short_source() {
        let mut out: Vec<u8> = Vec::new();
        let res = write_to(&mut Cursor::new(&b"ID3"[..]), &mut out, &Id3Tag::dummy());
        assert!(matches!(res, Err(TagError::TruncatedHeader)));
        assert!(out.is_empty());
    }
}
