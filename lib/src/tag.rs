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
use crate::error::TagError;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Placeholder text used by [`Id3Tag::dummy`]
pub const DUMMY_PREFIX: &str = "dummy";
/// Version string of a dummy tag
pub const DUMMY_VERSION: &str = "ID3v2.3";
/// Shown in place of a field that is not set
pub const NOT_AVAILABLE: &str = "N/A";

/// The text fields an [`Id3Tag`] can hold
///
/// Every field maps to exactly one frame identifier. [`TagField::ALL`] is also
/// the order in which frames are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagField {
    Title,
    Artist,
    Album,
    Year,
    Comment,
    Genre,
}

impl TagField {
    pub const ALL: [TagField; 6] = [
        TagField::Title,
        TagField::Artist,
        TagField::Album,
        TagField::Year,
        TagField::Comment,
        TagField::Genre,
    ];

    /// The name used to select this field, e.g. `title`
    pub const fn name(self) -> &'static str {
        match self {
            TagField::Title => "title",
            TagField::Artist => "artist",
            TagField::Album => "album",
            TagField::Year => "year",
            TagField::Comment => "comment",
            TagField::Genre => "genre",
        }
    }

    /// Capitalized label used when displaying a tag
    pub const fn label(self) -> &'static str {
        match self {
            TagField::Title => "Title",
            TagField::Artist => "Artist",
            TagField::Album => "Album",
            TagField::Year => "Year",
            TagField::Comment => "Comment",
            TagField::Genre => "Genre",
        }
    }

    /// The 4 byte frame identifier holding this field
    pub const fn frame_id(self) -> &'static [u8; 4] {
        match self {
            TagField::Title => b"TIT2",
            TagField::Artist => b"TPE1",
            TagField::Album => b"TALB",
            TagField::Year => b"TYER",
            TagField::Comment => b"COMM",
            TagField::Genre => b"TCON",
        }
    }

    /// Find the field stored in the frame `id`, `None` for frames we don't keep
    pub fn from_frame_id(id: &[u8; 4]) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.frame_id() == id)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for TagField {
    type Err = TagError;

    /// Exact, case-sensitive match against [`TagField::name`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| TagError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for TagField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! impl_accessor {
    ($($name:ident, $set:ident, $remove:ident => $field:expr;)+) => {
        impl Id3Tag {
            $(
                #[doc = concat!("Returns the ", stringify!($name), " as text, if set")]
                pub fn $name(&self) -> Option<Cow<'_, str>> {
                    self.get_text($field)
                }

                #[doc = concat!("Replaces the ", stringify!($name))]
                pub fn $set(&mut self, value: impl Into<Vec<u8>>) {
                    self.set($field, value);
                }

                #[doc = concat!("Unsets the ", stringify!($name))]
                pub fn $remove(&mut self) {
                    self.remove($field);
                }
            )+
        }
    };
}

/// The decoded metadata of one file
///
/// A plain value: all fields are independent and any byte sequence,
/// including an empty one, is accepted. Content is kept verbatim and only
/// interpreted as (lossy) UTF-8 when it is displayed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Id3Tag {
    /// The revision found in the header, e.g. `ID3v2.3.0`
    pub version: Option<String>,
    fields: [Option<Vec<u8>>; 6],
}

impl_accessor!(
    title, set_title, remove_title => TagField::Title;
    artist, set_artist, remove_artist => TagField::Artist;
    album, set_album, remove_album => TagField::Album;
    year, set_year, remove_year => TagField::Year;
    comment, set_comment, remove_comment => TagField::Comment;
    genre, set_genre, remove_genre => TagField::Genre;
);

impl Id3Tag {
    /// Create a tag with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// A tag filled with placeholder values, `dummy title`, `dummy artist` and so on
    pub fn dummy() -> Self {
        let mut tag = Self {
            version: Some(DUMMY_VERSION.to_string()),
            ..Self::default()
        };
        for field in TagField::ALL {
            tag.set(field, format!("{DUMMY_PREFIX} {}", field.name()));
        }
        tag
    }

    pub fn get(&self, field: TagField) -> Option<&[u8]> {
        self.fields[field.index()].as_deref()
    }

    pub fn get_text(&self, field: TagField) -> Option<Cow<'_, str>> {
        self.get(field).map(String::from_utf8_lossy)
    }

    /// Replace the content of `field`
    pub fn set(&mut self, field: TagField, value: impl Into<Vec<u8>>) {
        self.fields[field.index()] = Some(value.into());
    }

    /// Unset `field`, returning the previous content
    pub fn remove(&mut self, field: TagField) -> Option<Vec<u8>> {
        self.fields[field.index()].take()
    }

    /// Returns `true` if none of the six fields is set
    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(Option::is_none)
    }

    /// The set fields, in frame order
    pub fn iter(&self) -> impl Iterator<Item = (TagField, &[u8])> {
        TagField::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|value| (field, value)))
    }
}

impl fmt::Display for Id3Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<9}{}",
            "Version:",
            self.version.as_deref().unwrap_or(NOT_AVAILABLE)
        )?;
        for field in TagField::ALL {
            let value = self.get_text(field);
            write!(
                f,
                "\n{:<9}{}",
                format!("{}:", field.label()),
                value.as_deref().unwrap_or(NOT_AVAILABLE)
            )?;
        }
        Ok(())
    }
}
