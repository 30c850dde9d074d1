use super::*;

#[test]
fn source_detection_matches_known_providers() {
    assert_eq!(MusicSource::from_url("https://music.apple.com/playlist/x"), MusicSource::AppleMusic);
    assert_eq!(MusicSource::from_url("https://itunes.example/track"), MusicSource::AppleMusic);
    assert_eq!(MusicSource::from_url("https://open.SPOTIFY.com/track/y"), MusicSource::Spotify);
    assert_eq!(MusicSource::from_url("https://www.youtube.com/watch?v=z"), MusicSource::YouTube);
    assert_eq!(MusicSource::from_url("https://radio.example/stream"), MusicSource::Other);
}

#[test]
fn open_starts_visible_paused_at_default_volume() {
    let player = MusicState::open("https://open.spotify.com/track/y");
    assert!(player.visible);
    assert!(!player.playing);
    assert_eq!(player.volume, DEFAULT_VOLUME);
    assert_eq!(player.source(), MusicSource::Spotify);
}

#[test]
fn toggle_play_flips_back_and_forth() {
    let mut player = MusicState::open("x");
    player.toggle_play();
    assert!(player.playing);
    player.toggle_play();
    assert!(!player.playing);
}

#[test]
fn set_volume_clamps_to_slider_range() {
    let mut player = MusicState::open("x");
    player.set_volume(75);
    assert_eq!(player.volume, 75);
    player.set_volume(400);
    assert_eq!(player.volume, MAX_VOLUME);
    player.set_volume(0);
    assert_eq!(player.volume, 0);
}

#[test]
fn close_hides_and_stops_playback() {
    let mut player = MusicState::open("x");
    player.toggle_play();

    player.close();
    assert!(!player.visible);
    assert!(!player.playing);
}
