use std::collections::VecDeque;
use std::path::PathBuf;

use super::device::resolve_path;
use super::*;

fn bind_all(engine: &mut impl MediaEngine) {
    for kind in MediaEventKind::ALL {
        engine.add_listener(kind);
    }
}

#[test]
fn listeners_hand_out_distinct_handles_and_remove_once() {
    let mut listeners = Listeners::new();
    let a = listeners.add(MediaEventKind::TimeUpdate);
    let b = listeners.add(MediaEventKind::TimeUpdate);
    assert_ne!(a, b);
    assert_eq!(listeners.len(), 2);

    assert!(listeners.remove(a));
    assert!(!listeners.remove(a));
    assert!(listeners.is_bound(MediaEventKind::TimeUpdate));

    assert!(listeners.remove(b));
    assert!(!listeners.is_bound(MediaEventKind::TimeUpdate));
    assert!(listeners.is_empty());
}

#[test]
fn deliver_drops_events_without_listener() {
    let mut listeners = Listeners::new();
    listeners.add(MediaEventKind::Playing);
    listeners.add(MediaEventKind::DurationChange);

    let mut queue = VecDeque::from(vec![
        MediaEvent::TimeUpdate,
        MediaEvent::DurationChange(12.5),
        MediaEvent::Ended,
        MediaEvent::Playing,
    ]);
    let delivered = listeners.deliver(&mut queue);
    assert_eq!(
        delivered,
        vec![MediaEvent::DurationChange(12.5), MediaEvent::Playing]
    );
    assert!(queue.is_empty());
}

#[test]
fn event_kind_matches_variant() {
    let err = MediaError::new(MediaErrorCode::Decode, "bad frame");
    assert_eq!(MediaEvent::Error(err).kind(), MediaEventKind::Error);
    assert_eq!(
        MediaEvent::DurationChange(1.0).kind(),
        MediaEventKind::DurationChange
    );
    assert_eq!(MediaEvent::CanPlay.kind(), MediaEventKind::CanPlay);
}

#[test]
fn media_error_codes_follow_html_numbering() {
    assert_eq!(MediaErrorCode::Aborted as u16, 1);
    assert_eq!(MediaErrorCode::Network as u16, 2);
    assert_eq!(MediaErrorCode::Decode as u16, 3);
    assert_eq!(MediaErrorCode::SrcNotSupported as u16, 4);

    let err = MediaError::new(MediaErrorCode::Network, "gone");
    assert_eq!(err.to_string(), "network error: gone");
}

#[test]
fn resolve_path_accepts_paths_and_file_urls_only() {
    assert_eq!(resolve_path("a.mp3"), Some(PathBuf::from("a.mp3")));
    assert_eq!(
        resolve_path("/music/a.flac"),
        Some(PathBuf::from("/music/a.flac"))
    );
    assert_eq!(
        resolve_path("file:///music/a.flac"),
        Some(PathBuf::from("/music/a.flac"))
    );
    assert_eq!(resolve_path("https://example.com/a.mp3"), None);
}

#[test]
fn engine_error_maps_to_media_error_codes() {
    let open = EngineError::Open {
        path: PathBuf::from("/nope.mp3"),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };
    assert_eq!(MediaError::from(open).code, MediaErrorCode::Network);
    assert_eq!(
        MediaError::from(EngineError::UnsupportedFormat).code,
        MediaErrorCode::SrcNotSupported
    );
    assert_eq!(
        MediaError::from(EngineError::Decode("x".into())).code,
        MediaErrorCode::Decode
    );
}

#[test]
fn device_engine_reports_missing_file_on_play() {
    let (mixer, _source) = rodio::mixer::mixer(2, 44_100);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.mp3");

    let mut engine = DeviceEngine::new(path.to_str().unwrap(), PreloadPolicy::None, mixer);
    bind_all(&mut engine);
    assert!(engine.drain_events().is_empty());

    engine.play();
    let events = engine.drain_events();
    assert_eq!(events.len(), 1);
    let MediaEvent::Error(err) = &events[0] else {
        panic!("expected an error event, got {events:?}");
    };
    assert_eq!(err.code, MediaErrorCode::Network);
    assert_eq!(engine.error(), Some(err));
}

#[test]
fn device_engine_rejects_remote_sources() {
    let (mixer, _source) = rodio::mixer::mixer(2, 44_100);
    let mut engine = DeviceEngine::new("https://example.com/a.mp3", PreloadPolicy::None, mixer);
    bind_all(&mut engine);

    engine.play();
    let events = engine.drain_events();
    assert!(matches!(
        events.as_slice(),
        [MediaEvent::Error(MediaError { code: MediaErrorCode::SrcNotSupported, .. })]
    ));
}

#[test]
fn device_engine_auto_preload_reports_undecodable_file() {
    let (mixer, _source) = rodio::mixer::mixer(2, 44_100);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.mp3");
    std::fs::write(&path, b"not a real mp3").unwrap();

    let mut engine = DeviceEngine::new(path.to_str().unwrap(), PreloadPolicy::Auto, mixer);
    // Events queued before anyone listened are not handed over.
    assert!(engine.drain_events().is_empty());
    let err = engine.error().expect("auto preload should have failed");
    assert!(matches!(
        err.code,
        MediaErrorCode::SrcNotSupported | MediaErrorCode::Decode
    ));
}

#[test]
fn device_engine_remembers_seek_before_load() {
    let (mixer, _source) = rodio::mixer::mixer(2, 44_100);
    let mut engine = DeviceEngine::new("/nowhere/a.wav", PreloadPolicy::None, mixer);
    bind_all(&mut engine);

    engine.set_current_time(42.0);
    assert_eq!(engine.current_time(), 42.0);
    assert_eq!(engine.drain_events(), vec![MediaEvent::TimeUpdate]);

    engine.set_current_time(-3.0);
    assert_eq!(engine.current_time(), 0.0);

    engine.set_current_time(f64::NAN);
    assert_eq!(engine.current_time(), 0.0);
}

#[test]
fn device_engine_answers_from_capability_table() {
    let (mixer, _source) = rodio::mixer::mixer(2, 44_100);
    let engine = DeviceEngine::new("a.flac", PreloadPolicy::None, mixer);
    assert_eq!(engine.can_play_type("audio/flac"), CanPlayType::Probably);
    assert_eq!(engine.can_play_type("audio/midi"), CanPlayType::No);
    assert_eq!(engine.preload(), PreloadPolicy::None);
    assert_eq!(engine.source(), "a.flac");
    assert_eq!(engine.duration(), None);
}
