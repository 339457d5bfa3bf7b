use std::path::PathBuf;

/// Errors that could occur while reading, writing or editing a tag.
#[derive(thiserror::Error, Debug)]
pub enum TagError {
    /// The path does not carry one of the recognized audio extensions
    #[error("File does not appear to be an MP3 file: {}", .0.display())]
    NotAnAudioFile(PathBuf),
    /// Fewer than 10 bytes where the tag header is expected
    #[error("Failed to read ID3 header, the file is shorter than 10 bytes")]
    TruncatedHeader,
    /// The header does not start with the `ID3` marker
    #[error("No ID3 tag found")]
    NoTagPresent,
    /// The field name given to an edit is not one of the six known fields
    #[error("Unknown tag \"{0}\", expected one of: title, artist, album, year, comment, genre")]
    UnknownField(String),
    /// A size does not fit into its encoded field
    #[error("An abnormally large amount of data was provided, and an overflow occurred")]
    TooMuchData,

    /// Represents all cases of `std::io::Error`.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result of tag operations.
pub type Result<T> = std::result::Result<T, TagError>;
