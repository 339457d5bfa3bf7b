use crate::error::{Result, TagError};
use crate::tag::{Id3Tag, TagField, DUMMY_PREFIX, DUMMY_VERSION};
use crate::utils::{filetype_supported, get_app_config_path};

use std::path::Path;

use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Name of the config file inside the app config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Extensions accepted when nothing else is configured
pub const DEFAULT_EXTENSIONS: &[&str] = &["mp3"];

/// Options for reading and writing tags
///
/// # Example
///
/// ```rust
/// use mp3taglib::config::TagOptions;
///
/// let options = TagOptions::new().extensions(["mp3", "mp2"]);
/// assert!(options.is_supported(std::path::Path::new("song.MP2")));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagOptions {
    extensions: Vec<String>,
}

impl Default for TagOptions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl TagOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the recognized file extensions, compared case-insensitively
    #[must_use]
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_supported(&self, path: &Path) -> bool {
        filetype_supported(path, self.extensions.as_slice())
    }

    pub(crate) fn check_extension(&self, path: &Path) -> Result<()> {
        if self.is_supported(path) {
            Ok(())
        } else {
            Err(TagError::NotAnAudioFile(path.to_path_buf()))
        }
    }
}

/// Values written by the `write` command
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DummyTag {
    pub version: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: String,
    pub comment: String,
    pub genre: String,
}

impl Default for DummyTag {
    fn default() -> Self {
        let value = |field: TagField| format!("{DUMMY_PREFIX} {}", field.name());
        Self {
            version: DUMMY_VERSION.to_string(),
            title: value(TagField::Title),
            artist: value(TagField::Artist),
            album: value(TagField::Album),
            year: value(TagField::Year),
            comment: value(TagField::Comment),
            genre: value(TagField::Genre),
        }
    }
}

impl DummyTag {
    pub fn to_tag(&self) -> Id3Tag {
        let mut tag = Id3Tag::new();
        tag.version = Some(self.version.clone());
        tag.set_title(self.title.as_str());
        tag.set_artist(self.artist.as_str());
        tag.set_album(self.album.as_str());
        tag.set_year(self.year.as_str());
        tag.set_comment(self.comment.as_str());
        tag.set_genre(self.genre.as_str());
        tag
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// File extensions treated as mp3 files
    pub extensions: Vec<String>,
    pub dummy: DummyTag,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
            dummy: DummyTag::default(),
        }
    }
}

impl Settings {
    /// Load from the default location, see [`get_app_config_path`]
    ///
    /// A missing file results in the default settings.
    pub fn load() -> anyhow::Result<Self> {
        let path = get_app_config_path()?.join(CONFIG_FILE);
        Self::from_file(path)
    }

    /// Read a config file, needs to be toml formatted
    ///
    /// Keys missing from the file keep their default value.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        debug!("loading settings from {}", path.display());
        let data: Self = Figment::new().merge(Toml::file(path)).extract()?;

        Ok(data)
    }

    pub fn save_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        std::fs::write(path, toml::to_string(self)?)?;

        Ok(())
    }

    pub fn tag_options(&self) -> TagOptions {
        TagOptions::new().extensions(self.extensions.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_options_only_accept_mp3() {
        let options = TagOptions::default();
        assert!(options.is_supported(Path::new("/music/song.mp3")));
        assert!(options.is_supported(Path::new("song.MP3")));
        assert!(!options.is_supported(Path::new("song.flac")));
        assert!(!options.is_supported(Path::new("mp3")));
        assert!(matches!(
            options.check_extension(Path::new("cover.jpg")),
            Err(TagError::NotAnAudioFile(path)) if path == Path::new("cover.jpg")
        ));
    }

    #[test]
    fn dummy_settings_match_dummy_tag() {
        assert_eq!(DummyTag::default().to_tag(), Id3Tag::dummy());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::from_file(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            r#"
extensions = ["mp3", "mp2"]

[dummy]
title = "placeholder"
"#,
        )
        .unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.extensions, vec!["mp3", "mp2"]);
        assert_eq!(settings.dummy.title, "placeholder");
        assert_eq!(settings.dummy.artist, "dummy artist");
        assert!(settings
            .tag_options()
            .is_supported(Path::new("old.mp2")));
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let mut settings = Settings::default();
        settings.dummy.genre = "Jazz".to_string();
        settings.save_file(&path).unwrap();

        assert_eq!(Settings::from_file(&path).unwrap(), settings);
    }
}
