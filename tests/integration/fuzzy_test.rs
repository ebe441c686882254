use goto::core::alias_validator::validate_alias;
use goto::core::fuzzy::{find_similar, find_similar_names, score, similarity};

#[test]
fn test_transposed_query_finds_dev() {
    let candidates = ["dev", "projects", "docs"];
    let matches = find_similar("dve", &candidates, 0.3);

    assert_eq!(matches[0].value, "dev");
    assert!((matches[0].similarity - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_self_similarity_is_one() {
    for s in ["", "a", "Dev", "my-project_2", "ÄÖÜ", "日本"] {
        assert_eq!(similarity(s, s), 1.0, "{}", s);
        assert_eq!(similarity(&s.to_uppercase(), s), 1.0, "{}", s);
    }
}

#[test]
fn test_similarity_in_unit_interval() {
    let words = ["", "a", "dev", "development", "xyz", "Projects", "日本語"];
    for a in words {
        for b in words {
            let sim = similarity(a, b);
            assert!((0.0..=1.0).contains(&sim), "{:?} vs {:?} = {}", a, b, sim);
        }
    }
}

#[test]
fn test_substring_candidates_clear_boost_threshold() {
    let cases = [("proj", "projects"), ("Doc", "documents"), ("a", "banana"), ("web", "web")];
    for (query, candidate) in cases {
        let threshold = 0.5 + 0.5 * query.chars().count() as f64 / candidate.chars().count() as f64;
        assert!(score(query, candidate) >= threshold);

        let names = find_similar_names(query, &[candidate], threshold);
        assert_eq!(names, vec![candidate], "{} in {}", query, candidate);
    }
}

#[test]
fn test_empty_candidates_and_exact_threshold() {
    let none: [&str; 0] = [];
    assert!(find_similar("dev", &none, 0.0).is_empty());

    let names = find_similar_names("DEV", &["dev", "devs", "ved"], 1.0);
    assert_eq!(names, vec!["dev"]);
}

#[test]
fn test_identifier_rules() {
    for ok in ["a", "A1", "9lives", "my-project", "my_project", "x-_-y"] {
        assert!(validate_alias(ok).is_ok(), "{}", ok);
    }
    for bad in ["", "-a", "_a", "a b", "a.b", "a/b", "a\\b", "tab\there"] {
        assert!(validate_alias(bad).is_err(), "{:?}", bad);
    }
}
