// Integration tests for ideamap
use ideamap_core::{
    Analyzer, CountVectorizer, EmbeddingTable, Error, LanguageResources, TfidfVectorizer,
};
use std::io::Write;

fn ideas(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn glove_table(content: &str) -> (tempfile::NamedTempFile, EmbeddingTable) {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, "{content}").unwrap();
    let table = EmbeddingTable::load(f.path()).unwrap();
    (f, table)
}

#[test]
fn test_scenario_normalization_and_outlier_ranking() {
    let analyzer = Analyzer::new(LanguageResources::english());
    let analysis = analyzer
        .analyze(&ideas(&[
            "I like apples",
            "I like oranges",
            "The weather is sunny",
        ]))
        .unwrap();

    let normalized: Vec<&str> = analysis.ideas.iter().map(|i| i.normalized.as_str()).collect();
    assert!(normalized.contains(&"like apple"));
    assert!(normalized.contains(&"like orange"));
    assert!(normalized.contains(&"weather sunny"));

    // The weather idea shares no tokens with the others and must rank last
    assert_eq!(analysis.ideas.last().unwrap().text, "The weather is sunny");

    // The two apple/orange ideas tie on centroid distance; stable sort
    // keeps their input order
    assert_eq!(analysis.ideas[0].text, "I like apples");
    assert_eq!(analysis.ideas[1].text, "I like oranges");
}

#[test]
fn test_distance_matrix_invariants() {
    let analyzer = Analyzer::new(LanguageResources::english());
    let analysis = analyzer
        .analyze(&ideas(&[
            "I like apples",
            "I like oranges",
            "The weather is sunny",
        ]))
        .unwrap();

    let n = analysis.pairwise_distance.len();
    assert_eq!(n, 4); // 3 ideas + centroid
    for i in 0..n {
        assert_eq!(analysis.pairwise_distance[i][i], 0.0);
        assert_eq!(analysis.pairwise_similarity[i][i], 1.0);
        for j in 0..n {
            // Symmetry
            let d = analysis.pairwise_distance[i][j];
            assert!((d - analysis.pairwise_distance[j][i]).abs() < 1e-6);
            // similarity = 1 - distance
            let s = analysis.pairwise_similarity[i][j];
            assert!((s + d - 1.0).abs() < 1e-6, "at ({i},{j}): s={s} d={d}");
        }
    }

    // The centroid entry is last: identical to itself
    assert!((analysis.centroid_similarity[n - 1] - 1.0).abs() < 1e-6);
}

#[test]
fn test_ranking_is_non_decreasing_in_centroid_distance() {
    let analyzer = Analyzer::new(LanguageResources::english());
    let analysis = analyzer
        .analyze(&ideas(&[
            "build a tree house",
            "paint the fence",
            "build a bird house",
            "quantum entanglement experiments",
        ]))
        .unwrap();

    let n = analysis.ideas.len();
    for w in analysis.centroid_distance[..n].windows(2) {
        assert!(w[0] <= w[1] + 1e-6, "out of order: {w:?}");
    }
    // Position 0 holds the minimum
    let min = analysis.centroid_distance[..n]
        .iter()
        .cloned()
        .fold(f32::INFINITY, f32::min);
    assert!((analysis.centroid_distance[0] - min).abs() < 1e-6);
}

#[test]
fn test_identical_ideas_tie_stably() {
    let analyzer = Analyzer::new(LanguageResources::english());
    // Different raw text, identical after normalization
    let analysis = analyzer
        .analyze(&ideas(&["apple pie", "Apple pie!"]))
        .unwrap();

    assert_eq!(analysis.ideas[0].text, "apple pie");
    assert_eq!(analysis.ideas[1].text, "Apple pie!");
    assert_eq!(analysis.ideas[0].normalized, analysis.ideas[1].normalized);

    // Pairwise similarity between identical ideas is 1
    assert!((analysis.pairwise_similarity[0][1] - 1.0).abs() < 1e-6);
    // Equal minimal centroid distance
    assert!((analysis.centroid_distance[0] - analysis.centroid_distance[1]).abs() < 1e-6);
}

#[test]
fn test_single_idea_is_rejected() {
    let analyzer = Analyzer::new(LanguageResources::english());
    let err = analyzer.analyze(&ideas(&["just one idea"])).unwrap_err();
    assert!(matches!(
        err,
        Error::InsufficientIdeas { needed: 2, actual: 1 }
    ));
}

#[test]
fn test_empty_batch_is_rejected() {
    let analyzer = Analyzer::new(LanguageResources::english());
    let err = analyzer.analyze(&[]).unwrap_err();
    assert!(matches!(err, Error::InsufficientIdeas { .. }));
}

#[test]
fn test_punctuation_only_ideas_with_embeddings_yield_zero_similarity() {
    // All ideas normalize to nothing; with an embedding table loaded the
    // feature rows are zero vectors of the embedding width and the
    // pipeline completes with the similarity-0 convention, no NaN.
    let (_f, table) = glove_table("apple 1.0 0.0 0.5\n");
    let analyzer = Analyzer::new(LanguageResources::english()).with_embeddings(table);
    let analysis = analyzer.analyze(&ideas(&["!!!", "???"])).unwrap();

    for row in &analysis.pairwise_similarity {
        for v in row {
            assert!(!v.is_nan());
        }
    }
    assert_eq!(analysis.pairwise_similarity[0][1], 0.0);
    assert_eq!(analysis.centroid_similarity[0], 0.0);
    for row in &analysis.coordinates {
        assert!(row.iter().all(|v| v.is_finite()));
    }
}

#[test]
fn test_punctuation_only_ideas_without_embeddings_fail() {
    let analyzer = Analyzer::new(LanguageResources::english());
    let err = analyzer.analyze(&ideas(&["!!!", "???"])).unwrap_err();
    assert!(matches!(err, Error::EmptyVocabulary));
}

#[test]
fn test_embedding_fallback_keeps_pipeline_working() {
    let batch = ideas(&["I like apples", "I like oranges", "The weather is sunny"]);

    let sparse_only = Analyzer::new(LanguageResources::english())
        .analyze(&batch)
        .unwrap();
    assert!(!sparse_only.used_embeddings);

    let (_f, table) = glove_table(
        "apple 1.0 0.0 0.1\norange 0.9 0.1 0.1\nweather 0.0 1.0 0.5\nsunny 0.1 0.9 0.4\nlike 0.5 0.5 0.0\n",
    );
    let fused = Analyzer::new(LanguageResources::english())
        .with_embeddings(table)
        .analyze(&batch)
        .unwrap();
    assert!(fused.used_embeddings);

    // Both complete with the same shapes; the outlier stays the outlier
    assert_eq!(sparse_only.ideas.len(), fused.ideas.len());
    assert_eq!(sparse_only.ideas.last().unwrap().text, "The weather is sunny");
    assert_eq!(fused.ideas.last().unwrap().text, "The weather is sunny");
}

#[test]
fn test_missing_embedding_file_falls_back_silently() {
    let analyzer = Analyzer::new(LanguageResources::english())
        .with_embeddings_file(std::path::Path::new("/nonexistent/glove.txt"));
    let analysis = analyzer
        .analyze(&ideas(&["red apples", "green apples"]))
        .unwrap();
    assert!(!analysis.used_embeddings);
}

#[test]
fn test_reanalyzing_ranked_output_is_idempotent() {
    let analyzer = Analyzer::new(LanguageResources::english()).with_seed(7);
    let first = analyzer
        .analyze(&ideas(&[
            "The weather is sunny",
            "I like apples",
            "I like oranges",
        ]))
        .unwrap();

    let ranked: Vec<String> = first.ideas.iter().map(|i| i.text.clone()).collect();
    let second = analyzer.analyze(&ranked).unwrap();
    let reranked: Vec<String> = second.ideas.iter().map(|i| i.text.clone()).collect();

    // An already-ranked list is stable under re-analysis
    assert_eq!(ranked, reranked);
}

#[test]
fn test_fixed_seed_reproduces_coordinates() {
    let batch = ideas(&["I like apples", "I like oranges", "The weather is sunny"]);
    let a = Analyzer::new(LanguageResources::english())
        .with_seed(42)
        .analyze(&batch)
        .unwrap();
    let b = Analyzer::new(LanguageResources::english())
        .with_seed(42)
        .analyze(&batch)
        .unwrap();
    assert_eq!(a.coordinates, b.coordinates);
}

#[test]
fn test_marker_sizes_follow_centroid_similarity() {
    let analyzer = Analyzer::new(LanguageResources::english());
    let analysis = analyzer
        .analyze(&ideas(&[
            "I like apples",
            "I like oranges",
            "The weather is sunny",
        ]))
        .unwrap();

    let n = analysis.marker_sizes.len();
    for i in 0..n - 1 {
        let expected = analysis.centroid_similarity[i].powi(3) * 300.0;
        assert!((analysis.marker_sizes[i] - expected).abs() < 1e-4);
    }
    // Centroid marker is fixed
    assert_eq!(analysis.marker_sizes[n - 1], 100.0);
}

#[test]
fn test_tfidf_vectorizer_variant() {
    let analyzer = Analyzer::new(LanguageResources::english())
        .with_vectorizer(Box::new(TfidfVectorizer::new()));
    let analysis = analyzer
        .analyze(&ideas(&[
            "I like apples",
            "I like oranges",
            "The weather is sunny",
        ]))
        .unwrap();
    // The shared "like" token is downweighted but the outlier is unchanged
    assert_eq!(analysis.ideas.last().unwrap().text, "The weather is sunny");
}

#[test]
fn test_count_vectorizer_is_the_default() {
    let explicit = Analyzer::new(LanguageResources::english())
        .with_vectorizer(Box::new(CountVectorizer::new()))
        .analyze(&ideas(&["red apples", "green apples"]))
        .unwrap();
    let default = Analyzer::new(LanguageResources::english())
        .analyze(&ideas(&["red apples", "green apples"]))
        .unwrap();
    assert_eq!(explicit.pairwise_distance, default.pairwise_distance);
}

#[test]
fn test_output_serializes_to_plain_json_arrays() {
    let analyzer = Analyzer::new(LanguageResources::english());
    let analysis = analyzer
        .analyze(&ideas(&["red apples", "green apples"]))
        .unwrap();
    let value = serde_json::to_value(&analysis).unwrap();

    assert!(value["pairwise_distance"].is_array());
    assert!(value["pairwise_distance"][0].is_array());
    assert!(value["coordinates"][0][0].is_number());
    assert!(value["ideas"][0]["text"].is_string());
}
