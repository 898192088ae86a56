use tunescope::types::{Track, TrackArtist};
use tunescope::utils::*;

// Helper function to create a test track
fn create_test_track(id: &str, artists: &[&str]) -> Track {
    Track {
        id: id.to_string(),
        name: format!("Track {}", id),
        uri: format!("spotify:track:{}", id),
        duration_ms: 200_000,
        artists: artists
            .iter()
            .map(|name| TrackArtist {
                id: None,
                name: name.to_string(),
            })
            .collect(),
        album: None,
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // SHA256 digest, base64 without padding
    assert_eq!(challenge.len(), 43);

    // Should be deterministic - same input produces same output
    assert_eq!(challenge, generate_code_challenge(verifier));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_round_half_up() {
    assert_eq!(round_half_up(2.5), 3);
    assert_eq!(round_half_up(2.49), 2);
    assert_eq!(round_half_up(-7.5), -7);
    assert_eq!(round_half_up(-7.6), -8);
    assert_eq!(round_half_up(0.0), 0);
}

#[test]
fn test_round_half_up_just_below_half() {
    // Largest double below 0.5; adding 0.5 to it would round up to 1.0
    assert_eq!(round_half_up(0.49999999999999994), 0);
    assert_eq!(round_half_up(-0.5), 0);
    assert_eq!(round_half_up(-0.50000000000000011), -1);
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(215_000), "3:35");
    assert_eq!(format_duration(61_000), "1:01");
    assert_eq!(format_duration(999), "0:00");
}

#[test]
fn test_format_percent() {
    assert_eq!(format_percent(0.456), "46%");
    assert_eq!(format_percent(0.9), "90%");
    assert_eq!(format_percent(0.0), "0%");
}

#[test]
fn test_join_artist_names() {
    let track = create_test_track("id1", &["Artist A", "Artist B"]);
    assert_eq!(join_artist_names(&track), "Artist A, Artist B");

    let solo = create_test_track("id2", &[]);
    assert_eq!(join_artist_names(&solo), "");
}

#[test]
fn test_dedup_ids() {
    let mut ids = vec![
        "id1".to_string(),
        "id2".to_string(),
        "id1".to_string(), // Duplicate
        "id3".to_string(),
    ];

    dedup_ids(&mut ids);

    // Should contain the first occurrence of each unique ID
    assert_eq!(ids, vec!["id1", "id2", "id3"]);
}
