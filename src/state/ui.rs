//! Site chrome state — the floating music mini player.
//!
//! Keeps transient presentation concerns out of domain state so the player
//! widget can evolve independently of auth and dashboard data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

pub const DEFAULT_VOLUME: u8 = 50;
pub const MAX_VOLUME: u8 = 100;

/// Streaming provider inferred from the audio source URL, used to pick the
/// badge shown in the player header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MusicSource {
    AppleMusic,
    Spotify,
    YouTube,
    Other,
}

impl MusicSource {
    #[must_use]
    pub fn from_url(url: &str) -> Self {
        let url = url.to_ascii_lowercase();
        if url.contains("apple") || url.contains("itunes") {
            Self::AppleMusic
        } else if url.contains("spotify") {
            Self::Spotify
        } else if url.contains("youtube") {
            Self::YouTube
        } else {
            Self::Other
        }
    }
}

/// State of the draggable mini music player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MusicState {
    pub source_url: String,
    pub playing: bool,
    /// 0..=100, the slider range.
    pub volume: u8,
    pub visible: bool,
}

impl Default for MusicState {
    fn default() -> Self {
        Self {
            source_url: String::new(),
            playing: false,
            volume: DEFAULT_VOLUME,
            visible: false,
        }
    }
}

impl MusicState {
    /// Open the player on a new source, paused at the default volume.
    #[must_use]
    pub fn open(source_url: &str) -> Self {
        Self { source_url: source_url.to_owned(), visible: true, ..Self::default() }
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    /// Set volume, clamping to the slider range.
    pub fn set_volume(&mut self, volume: u16) {
        self.volume = u8::try_from(volume.min(u16::from(MAX_VOLUME))).unwrap_or(MAX_VOLUME);
    }

    /// Close the player; playback stops with it.
    pub fn close(&mut self) {
        self.visible = false;
        self.playing = false;
    }

    #[must_use]
    pub fn source(&self) -> MusicSource {
        MusicSource::from_url(&self.source_url)
    }
}
