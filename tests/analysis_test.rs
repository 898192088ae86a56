use std::collections::BTreeSet;

use tunescope::analysis::{
    Criteria, Feature, FeatureVector, Interval, MOOD_CATEGORIES, MoodCategory, MusicProfile,
    RecommendationParams, SimilarityBand, aggregate, analyze_track, classify, classify_with,
    find_category, similarity, track::genre_style, track::key_name,
};

const EPS: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

// Helper function to create a feature vector with neutral defaults
fn create_test_vector(energy: f64, valence: f64, danceability: f64) -> FeatureVector {
    FeatureVector {
        danceability,
        energy,
        acousticness: 0.1,
        valence,
        speechiness: 0.05,
        instrumentalness: 0.0,
        tempo: 120.0,
        loudness: -6.0,
        key: 0,
        mode: 1,
        time_signature: 4,
    }
}

// Helper function to create a category accepting any valence
fn create_test_category(name: &str, energy: Interval) -> MoodCategory {
    MoodCategory {
        name: name.to_string(),
        description: format!("{} test category", name),
        color: "ocean-blue".to_string(),
        emoji: "🎧".to_string(),
        criteria: Criteria::new(energy, Interval::new(0.0, 1.0)),
    }
}

#[test]
fn test_aggregate_empty() {
    let profile = aggregate(&[]);

    assert_eq!(profile.avg_danceability, 0.0);
    assert_eq!(profile.avg_energy, 0.0);
    assert_eq!(profile.avg_acousticness, 0.0);
    assert_eq!(profile.avg_valence, 0.0);
    assert_eq!(profile.avg_tempo, 0.0);
    assert_eq!(profile.avg_loudness, 0.0);
    assert!(profile.preferred_keys.is_empty());
    assert!(profile.preferred_modes.is_empty());
    assert!(profile.time_signature_preferences.is_empty());
    assert!(profile.genre_preferences.is_empty());
    assert_eq!(profile, MusicProfile::default());
}

#[test]
fn test_aggregate_single_vector() {
    let mut v = create_test_vector(0.73, 0.41, 0.66);
    v.key = 7;
    v.mode = 0;
    v.time_signature = 3;
    let profile = aggregate(&[v]);

    // Means over one element are the element itself
    assert_eq!(profile.avg_danceability, v.danceability);
    assert_eq!(profile.avg_energy, v.energy);
    assert_eq!(profile.avg_acousticness, v.acousticness);
    assert_eq!(profile.avg_valence, v.valence);
    assert_eq!(profile.avg_tempo, v.tempo);
    assert_eq!(profile.avg_loudness, v.loudness);
    assert_eq!(profile.preferred_keys, BTreeSet::from([7]));
    assert_eq!(profile.preferred_modes, BTreeSet::from([0]));
    assert_eq!(profile.time_signature_preferences, BTreeSet::from([3]));
}

#[test]
fn test_aggregate_keeps_all_tied_values() {
    let keys = [0, 5, 0, 5, 7];
    let vectors: Vec<FeatureVector> = keys
        .iter()
        .map(|k| {
            let mut v = create_test_vector(0.5, 0.5, 0.5);
            v.key = *k;
            v
        })
        .collect();

    let profile = aggregate(&vectors);

    assert_eq!(profile.preferred_keys, BTreeSet::from([0, 5]));
    assert_eq!(profile.preferred_modes, BTreeSet::from([1]));
    assert_eq!(profile.time_signature_preferences, BTreeSet::from([4]));
}

#[test]
fn test_aggregate_tied_modes_and_time_signatures() {
    let vectors: Vec<FeatureVector> = [(0, 3), (1, 4), (0, 4), (1, 3)]
        .iter()
        .map(|(mode, ts)| {
            let mut v = create_test_vector(0.5, 0.5, 0.5);
            v.mode = *mode;
            v.time_signature = *ts;
            v
        })
        .collect();

    let profile = aggregate(&vectors);

    assert_eq!(profile.preferred_modes, BTreeSet::from([0, 1]));
    assert_eq!(profile.time_signature_preferences, BTreeSet::from([3, 4]));

    let profile = aggregate(&vectors[1..]);
    assert_eq!(profile.preferred_modes, BTreeSet::from([1]));
    assert_eq!(profile.time_signature_preferences, BTreeSet::from([4]));
}

#[test]
fn test_aggregate_unknown_key_counts_like_any_other() {
    let mut a = create_test_vector(0.5, 0.5, 0.5);
    a.key = -1;
    let mut b = a;
    b.key = 2;
    let profile = aggregate(&[a, a, b]);

    assert_eq!(profile.preferred_keys, BTreeSet::from([-1]));
}

#[test]
fn test_aggregate_means() {
    let mut a = create_test_vector(0.2, 0.1, 0.3);
    a.tempo = 100.0;
    a.loudness = -10.0;
    let mut b = create_test_vector(0.8, 0.5, 0.9);
    b.tempo = 140.0;
    b.loudness = -4.0;

    let profile = aggregate(&[a, b]);

    assert!(approx(profile.avg_energy, 0.5));
    assert!(approx(profile.avg_valence, 0.3));
    assert!(approx(profile.avg_danceability, 0.6));
    assert!(approx(profile.avg_tempo, 120.0));
    assert!(approx(profile.avg_loudness, -7.0));
}

#[test]
fn test_interval_is_inclusive() {
    let interval = Interval::new(0.4, 0.8);

    assert!(interval.contains(0.4));
    assert!(interval.contains(0.8));
    assert!(interval.contains(0.6));
    assert!(!interval.contains(0.39));
    assert!(!interval.contains(0.81));
    assert!(approx(interval.midpoint(), 0.6));
}

#[test]
fn test_criteria_interval_lookup() {
    let criteria = Criteria::new(Interval::new(0.6, 1.0), Interval::new(0.3, 0.8))
        .with(Feature::Acousticness, Interval::new(0.0, 0.4));

    assert_eq!(criteria.interval(Feature::Energy), Some(Interval::new(0.6, 1.0)));
    assert_eq!(criteria.interval(Feature::Valence), Some(Interval::new(0.3, 0.8)));
    assert_eq!(
        criteria.interval(Feature::Acousticness),
        Some(Interval::new(0.0, 0.4))
    );
    assert_eq!(criteria.interval(Feature::Danceability), None);
}

#[test]
fn test_criteria_with_mandatory_feature_replaces_range() {
    let criteria = Criteria::new(Interval::new(0.0, 1.0), Interval::new(0.0, 1.0))
        .with(Feature::Energy, Interval::new(0.9, 1.0))
        .with(Feature::Valence, Interval::new(0.2, 0.4));

    assert_eq!(criteria.energy, Interval::new(0.9, 1.0));
    assert_eq!(criteria.valence, Interval::new(0.2, 0.4));
    assert_eq!(criteria.interval(Feature::Energy), Some(Interval::new(0.9, 1.0)));
    assert_eq!(criteria.optional().count(), 0);

    // Classification and the bias midpoint see the same energy range
    let v = create_test_vector(0.5, 0.3, 0.5);
    assert!(!criteria.matches(&v));
    let v = create_test_vector(0.95, 0.3, 0.5);
    assert!(criteria.matches(&v));
}

#[test]
fn test_criteria_deserialize_rejects_mandatory_in_optional() {
    let json = serde_json::json!({
        "energy": { "min": 0.0, "max": 1.0 },
        "valence": { "min": 0.0, "max": 1.0 },
        "optional": { "energy": { "min": 0.9, "max": 1.0 } }
    });
    assert!(serde_json::from_value::<Criteria>(json).is_err());

    let json = serde_json::json!({
        "energy": { "min": 0.6, "max": 1.0 },
        "valence": { "min": 0.3, "max": 0.8 },
        "optional": { "acousticness": { "min": 0.0, "max": 0.4 } }
    });
    let criteria: Criteria = serde_json::from_value(json).unwrap();
    assert_eq!(
        criteria.interval(Feature::Acousticness),
        Some(Interval::new(0.0, 0.4))
    );
}

#[test]
fn test_builtin_table_order_and_names() {
    let names: Vec<&str> = MOOD_CATEGORIES.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Pop",
            "Rock",
            "EDM/Dance",
            "Acoustic",
            "Hip-Hop/R&B",
            "Ambient/Chill"
        ]
    );

    // Names are unique keys
    let unique: BTreeSet<&str> = names.iter().copied().collect();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn test_classify_high_energy_dance_track() {
    let v = create_test_vector(0.9, 0.9, 0.9);
    let category = classify(&v).expect("should match a category");

    // Pop caps energy at 0.8 and Rock caps valence at 0.8
    assert_eq!(category.name, "EDM/Dance");
}

#[test]
fn test_classify_no_match() {
    let v = create_test_vector(0.05, 0.05, 0.5);
    assert!(classify(&v).is_none());
}

#[test]
fn test_classify_first_match_wins() {
    // Inside both Pop and Hip-Hop/R&B regions
    let v = create_test_vector(0.6, 0.6, 0.7);
    assert_eq!(classify(&v).map(|c| c.name.as_str()), Some("Pop"));

    let reversed: Vec<MoodCategory> = MOOD_CATEGORIES.iter().rev().cloned().collect();
    assert_eq!(
        classify_with(&reversed, &v).map(|c| c.name.as_str()),
        Some("Hip-Hop/R&B")
    );
}

#[test]
fn test_classify_optional_criteria() {
    // Ambient/Chill needs instrumentalness >= 0.3
    let mut v = create_test_vector(0.2, 0.5, 0.2);
    v.instrumentalness = 0.1;
    assert!(classify(&v).is_none());

    v.instrumentalness = 0.3;
    assert_eq!(classify(&v).map(|c| c.name.as_str()), Some("Ambient/Chill"));
}

#[test]
fn test_end_to_end_energy_scenario() {
    let vectors: Vec<FeatureVector> = [0.2, 0.4, 0.6]
        .iter()
        .map(|e| create_test_vector(*e, 0.5, 0.5))
        .collect();

    let profile = aggregate(&vectors);
    assert!(approx(profile.avg_energy, 0.4));

    let table = vec![create_test_category("Energetic", Interval::new(0.6, 1.0))];
    let matches: Vec<bool> = vectors
        .iter()
        .map(|v| classify_with(&table, v).is_some())
        .collect();
    assert_eq!(matches, vec![false, false, true]);
}

#[test]
fn test_similarity_self_is_point_nine() {
    let profile = aggregate(&[
        create_test_vector(0.3, 0.7, 0.5),
        create_test_vector(0.9, 0.2, 0.4),
    ]);

    // Key and mode weights are never added
    assert!(approx(similarity(&profile, &profile), 0.90));
}

#[test]
fn test_similarity_decreases_with_energy_gap() {
    let base = aggregate(&[create_test_vector(0.2, 0.5, 0.5)]);

    let scores: Vec<f64> = [0.0, 0.1, 0.3, 0.6, 0.8]
        .iter()
        .map(|delta| {
            let other = aggregate(&[create_test_vector(0.2 + delta, 0.5, 0.5)]);
            similarity(&base, &other)
        })
        .collect();

    for pair in scores.windows(2) {
        assert!(pair[0] > pair[1], "{:?} is not decreasing", scores);
    }
    // 0.20 weight per unit of energy difference
    assert!(approx(scores[0] - scores[2], 0.3 * 0.2));
}

#[test]
fn test_similarity_is_symmetric() {
    let a = aggregate(&[create_test_vector(0.1, 0.9, 0.3)]);
    let mut b_vec = create_test_vector(0.7, 0.2, 0.8);
    b_vec.tempo = 90.0;
    b_vec.loudness = -20.0;
    let b = aggregate(&[b_vec]);

    assert!(approx(similarity(&a, &b), similarity(&b, &a)));
}

#[test]
fn test_similarity_tempo_and_loudness_terms_floor_at_zero() {
    let mut a_vec = create_test_vector(0.5, 0.5, 0.5);
    a_vec.tempo = 60.0;
    a_vec.loudness = -60.0;
    let mut b_vec = a_vec;
    b_vec.tempo = 400.0;
    b_vec.loudness = 10.0;

    let score = similarity(&aggregate(&[a_vec]), &aggregate(&[b_vec]));

    // Only the four unit-range terms remain
    assert!(approx(score, 0.75));
}

#[test]
fn test_similarity_clamps_out_of_range_input() {
    let a = MusicProfile {
        avg_danceability: 10.0,
        avg_energy: 10.0,
        avg_valence: 10.0,
        avg_acousticness: 10.0,
        ..MusicProfile::default()
    };
    let b = MusicProfile::default();

    assert_eq!(similarity(&a, &b), 0.0);
}

#[test]
fn test_similarity_band() {
    assert_eq!(SimilarityBand::from_score(0.81), SimilarityBand::ExtremelySimilar);
    assert_eq!(SimilarityBand::from_score(0.8), SimilarityBand::VerySimilar);
    assert_eq!(SimilarityBand::from_score(0.5), SimilarityBand::Similar);
    assert_eq!(SimilarityBand::from_score(0.4), SimilarityBand::SomewhatSimilar);
    assert_eq!(SimilarityBand::ExtremelySimilar.color(), "neon-pink");
}

#[test]
fn test_recommendation_params_without_bias() {
    let mut v = create_test_vector(0.1, 0.95, 0.6);
    v.acousticness = 0.3;
    v.tempo = 120.5;
    v.loudness = -7.5;
    let profile = aggregate(&[v]);

    let params = RecommendationParams::from_profile(&profile, None);

    assert_eq!(params.target_energy, profile.avg_energy);
    assert_eq!(params.target_valence, profile.avg_valence);
    assert_eq!(params.target_danceability, profile.avg_danceability);
    assert_eq!(params.target_acousticness, profile.avg_acousticness);
    assert_eq!(params.target_tempo, 121);
    assert_eq!(params.target_loudness, -7);
    assert_eq!(params.limit, 20);

    assert_eq!(params.min_energy, (params.target_energy - 0.2).max(0.0));
    assert_eq!(params.max_energy, (params.target_energy + 0.2).min(1.0));
    assert_eq!(params.min_energy, 0.0);
    assert_eq!(params.max_valence, 1.0);
    assert!(approx(params.min_valence, 0.75));
}

#[test]
fn test_recommendation_params_unknown_bias_is_ignored() {
    let profile = aggregate(&[create_test_vector(0.5, 0.5, 0.5)]);

    assert_eq!(
        RecommendationParams::from_profile(&profile, Some("Polka")),
        RecommendationParams::from_profile(&profile, None)
    );
}

#[test]
fn test_recommendation_params_bias_overrides_energy_midpoint() {
    let table = vec![create_test_category("Energetic", Interval::new(0.7, 1.0))];

    for energy in [0.0, 0.3, 0.95] {
        let profile = aggregate(&[create_test_vector(energy, 0.5, 0.5)]);
        let params = RecommendationParams::from_profile_with(&table, &profile, Some("Energetic"));

        assert!(approx(params.target_energy, 0.85));
        assert!(approx(params.min_energy, 0.65));
        assert_eq!(params.max_energy, 1.0);
        assert!(approx(params.target_valence, 0.5));
    }
}

#[test]
fn test_recommendation_params_bias_with_optional_intervals() {
    let mut v = create_test_vector(0.2, 0.2, 0.1);
    v.acousticness = 0.9;
    let profile = aggregate(&[v]);

    let edm = RecommendationParams::from_profile(&profile, Some("EDM/Dance"));
    assert!(approx(edm.target_energy, 0.8));
    assert!(approx(edm.target_valence, 0.7));
    assert!(approx(edm.target_danceability, 0.85));
    assert!(approx(edm.target_acousticness, 0.15));
    assert!(approx(edm.min_energy, 0.6));
    assert!(approx(edm.max_energy, 1.0));
    assert!(approx(edm.min_valence, 0.5));
    assert!(approx(edm.max_valence, 0.9));

    // Rock has no danceability interval, the profile value stays
    let rock = RecommendationParams::from_profile(&profile, Some("Rock"));
    assert_eq!(rock.target_danceability, profile.avg_danceability);
    assert!(approx(rock.target_acousticness, 0.2));
}

#[test]
fn test_recommendation_query_pairs() {
    let profile = aggregate(&[create_test_vector(0.5, 0.5, 0.5)]);
    let pairs = RecommendationParams::from_profile(&profile, None).to_query_pairs();

    let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
    assert!(keys.contains(&"target_energy"));
    assert!(keys.contains(&"min_valence"));
    assert!(pairs.contains(&("limit", "20".to_string())));
    assert!(pairs.contains(&("target_tempo", "120".to_string())));
}

#[test]
fn test_seed_targets_only_send_track_targets() {
    let mut v = create_test_vector(0.7, 0.3, 0.6);
    v.tempo = 127.5;
    let pairs = RecommendationParams::seed_targets(&v, 50);

    let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        keys,
        vec![
            "target_energy",
            "target_danceability",
            "target_valence",
            "target_acousticness",
            "target_tempo",
            "limit"
        ]
    );
    assert!(pairs.contains(&("target_energy", "0.7".to_string())));
    assert!(pairs.contains(&("target_tempo", "128".to_string())));
    assert!(pairs.contains(&("limit", "50".to_string())));
}

#[test]
fn test_find_category() {
    assert!(find_category(&MOOD_CATEGORIES, "Rock").is_some());
    assert!(find_category(&MOOD_CATEGORIES, "rock").is_none());
}

#[test]
fn test_analyze_track_technical() {
    let mut v = create_test_vector(0.9, 0.9, 0.9);
    v.key = 1;
    v.mode = 0;
    v.tempo = 127.6;
    v.loudness = -5.5;

    let analysis = analyze_track(&v);

    assert_eq!(analysis.mood.map(|m| m.name.as_str()), Some("EDM/Dance"));
    assert_eq!(analysis.technical.key, "C#");
    assert_eq!(analysis.technical.mode, "Minor");
    assert_eq!(analysis.technical.time_signature, "4/4");
    assert_eq!(analysis.technical.tempo, "128 BPM");
    assert_eq!(analysis.technical.loudness, "-5 dB");
}

#[test]
fn test_analyze_track_characteristics_use_strict_thresholds() {
    let mut v = create_test_vector(0.4, 0.71, 0.7);
    v.acousticness = 0.3;
    v.speechiness = 0.67;
    v.instrumentalness = 0.5;

    let c = analyze_track(&v).characteristics;

    assert_eq!(c.dance_floor, "Light groove");
    assert_eq!(c.energy, "Low energy");
    assert_eq!(c.emotion, "Positive");
    assert_eq!(c.acoustic, "Electronic");
    assert_eq!(c.vocal, "Speech-like");
    assert_eq!(c.instrumental, "Vocal-led");
}

#[test]
fn test_genre_style_fallback() {
    // Valence below every category range
    let mut v = create_test_vector(0.85, 0.1, 0.8);
    v.acousticness = 0.5;
    assert!(classify(&v).is_none());
    assert_eq!(genre_style(&v), "EDM/Dance");

    let mut other = create_test_vector(0.5, 0.1, 0.3);
    other.acousticness = 0.2;
    assert_eq!(genre_style(&other), "Other");

    let matched = create_test_vector(0.6, 0.6, 0.7);
    assert_eq!(genre_style(&matched), "Pop");
}

#[test]
fn test_key_name() {
    assert_eq!(key_name(0), "C");
    assert_eq!(key_name(11), "B");
    assert_eq!(key_name(-1), "Unknown");
    assert_eq!(key_name(12), "Unknown");
}

#[test]
fn test_feature_vector_from_spotify_json() {
    let json = r#"{
        "acousticness": 0.00242,
        "analysis_url": "https://api.spotify.com/v1/audio-analysis/2takcwOaAZWiXQijPHIx7B",
        "danceability": 0.585,
        "duration_ms": 237040,
        "energy": 0.842,
        "id": "2takcwOaAZWiXQijPHIx7B",
        "instrumentalness": 0.00686,
        "key": 9,
        "liveness": 0.0866,
        "loudness": -5.883,
        "mode": 0,
        "speechiness": 0.0556,
        "tempo": 118.211,
        "time_signature": 4,
        "type": "audio_features",
        "valence": 0.428
    }"#;

    let v: FeatureVector = serde_json::from_str(json).expect("valid audio features");

    assert_eq!(v.key, 9);
    assert_eq!(v.energy, 0.842);
    assert_eq!(v.value(Feature::Tempo), 118.211);
    assert_eq!(v.value(Feature::Loudness), -5.883);
}
