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
use crate::frame::{read_frame, FrameRead};
use crate::header::TagHeader;
use crate::tag::Id3Tag;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read the tag of the file at `path`
///
/// Fails with [`TagError::NoTagPresent`] if the file does not start with an ID3 header,
/// see [`read_or_empty`] to treat that as an empty tag instead.
pub fn read_from_path<P: AsRef<Path>>(path: P, options: &TagOptions) -> Result<Id3Tag> {
    let path = path.as_ref();
    options.check_extension(path)?;

    let mut reader = BufReader::new(File::open(path)?);
    let tag = read_from(&mut reader)?;
    info!("read {} frame(s) from {}", tag.iter().count(), path.display());

    Ok(tag)
}

/// Like [`read_from_path`], but a file without a tag gives a tag with nothing set
pub fn read_or_empty<P: AsRef<Path>>(path: P, options: &TagOptions) -> Result<Id3Tag> {
    match read_from_path(path.as_ref(), options) {
        Err(TagError::NoTagPresent) => {
            info!("no ID3 tag in {}", path.as_ref().display());
            Ok(Id3Tag::new())
        }
        res => res,
    }
}

/// Read a tag from the start of `reader`
///
/// Frames are decoded until the declared tag size is used up, padding is
/// found, or the data ends. A frame that is cut short ends the tag, keeping
/// the fields decoded before it.
pub fn read_from<R>(reader: &mut R) -> Result<Id3Tag>
where
    R: Read,
{
    let header = TagHeader::read(reader)?;
    debug!(
        "found {} tag, {} bytes after the header",
        header.version_string(),
        header.size
    );

    let mut tag = Id3Tag::new();
    tag.version = Some(header.version_string());

    let tag_size = u64::from(header.size);
    let mut consumed = 0_u64;

    while consumed < tag_size {
        match read_frame(reader)? {
            FrameRead::Frame(frame) => {
                consumed += frame.encoded_len();
                match frame.field() {
                    Some(field) => {
                        debug!("{} => {field}, {} bytes", frame.id_str(), frame.content.len());
                        tag.set(field, frame.content);
                    }
                    None => debug!("skipping frame {}", frame.id_str()),
                }
            }
            FrameRead::Padding => {
                debug!("reached padding after {consumed} bytes");
                break;
            }
            FrameRead::Eof => break,
            FrameRead::Truncated => {
                warn!("frame after {consumed} bytes is truncated, ignoring the rest of the tag");
                break;
            }
        }
    }

    Ok(tag)
}
