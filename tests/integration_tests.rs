use state_set_index::prelude::*;
use std::collections::BTreeSet;

fn worked_example_mapping() -> CharTable {
    [
        ('M', '1'),
        ('u', '2'),
        ('e', '3'),
        ('l', '4'),
        ('r', '1'),
        ('ü', '2'),
        ('n', '3'),
        ('t', '4'),
        ('s', '1'),
        ('m', '2'),
        ('a', '3'),
    ]
    .into_iter()
    .collect()
}

const NAMES: [&str; 5] = ["Müller", "Mueller", "Muentner", "Muster", "Mustermann"];

#[test]
fn test_worked_example() {
    let index = StateSetIndex::build(NAMES, worked_example_mapping(), 6).unwrap();

    let found = index.find("Mustre", 2).unwrap();
    assert_eq!(
        found,
        Some(Candidate {
            term: "Muster".to_string(),
            distance: 2
        })
    );
}

#[test]
fn test_worked_example_tighter_threshold() {
    let index = StateSetIndex::build(NAMES, worked_example_mapping(), 6).unwrap();
    // Mustre -> Muster needs a transposition, i.e. two plain edits.
    assert_eq!(index.find("Mustre", 1).unwrap(), None);
    assert_eq!(
        index.find("Muster", 0).unwrap().map(|c| c.term),
        Some("Muster".to_string())
    );
}

#[test]
fn test_no_match_in_unrelated_dictionary() {
    let index = StateSetIndex::build(["alpha", "beta", "gamma"], Identity, 4).unwrap();
    assert_eq!(index.find("zzzzzz", 2).unwrap(), None);
}

#[test]
fn test_threshold_zero_requires_exact_entry() {
    let words = ["apple", "apply", "applesauce", "ape"];
    let index = StateSetIndex::build(words, Identity, 3).unwrap();

    for word in words {
        let found = index.find(word, 0).unwrap().unwrap();
        assert_eq!(found.term, word);
        assert_eq!(found.distance, 0);
    }
    assert_eq!(index.find("appl", 0).unwrap(), None);
    assert_eq!(index.find("apples", 0).unwrap(), None);
}

#[test]
fn test_duplicate_entries_are_ignored() {
    let once = StateSetIndex::build(["test", "testing"], Identity, 4).unwrap();
    let twice = StateSetIndex::build(["test", "testing", "test", "testing"], Identity, 4).unwrap();

    assert_eq!(once.len(), twice.len());
    assert_eq!(once.node_count(), twice.node_count());
    assert_eq!(once.find("tset", 2).unwrap(), twice.find("tset", 2).unwrap());
}

#[test]
fn test_build_order_does_not_matter() {
    let forward = StateSetIndex::build(NAMES, worked_example_mapping(), 6).unwrap();
    let mut reversed_names = NAMES;
    reversed_names.reverse();
    let reversed = StateSetIndex::build(reversed_names, worked_example_mapping(), 6).unwrap();

    assert_eq!(forward.node_count(), reversed.node_count());
    for query in ["Mustre", "Muler", "Mueler", "Mustermann", "Mntner"] {
        for threshold in 0..4 {
            assert_eq!(
                forward.find(query, threshold).unwrap(),
                reversed.find(query, threshold).unwrap(),
                "{} at {}",
                query,
                threshold
            );
        }
    }
}

#[test]
fn test_complete_coverage_finds_more_than_indexed_prefix() {
    let words = ["xabc", "abcd", "zzzz"];
    let complete = IndexBuilder::new().prefix_length(3).build(words).unwrap();
    let truncated = IndexBuilder::new()
        .prefix_length(3)
        .coverage(Coverage::IndexedPrefix)
        .build(words)
        .unwrap();

    let complete_candidates: BTreeSet<&str> =
        complete.candidates("abc", 1).unwrap().into_iter().collect();
    let truncated_candidates: BTreeSet<&str> =
        truncated.candidates("abc", 1).unwrap().into_iter().collect();

    assert!(complete_candidates.contains("xabc"));
    assert!(complete_candidates.contains("abcd"));
    assert!(!truncated_candidates.contains("xabc"));
    assert!(truncated_candidates.contains("abcd"));

    // Same answer whenever the indexed-prefix candidates happen to suffice.
    assert_eq!(
        complete.find("abcd", 1).unwrap(),
        truncated.find("abcd", 1).unwrap()
    );
}

#[test]
fn test_phonetic_mapping_still_ranks_by_spelling() {
    let index = StateSetIndex::build(["Meyer", "Maier", "Mayr", "Schmidt"], PhoneticClasses, 6).unwrap();

    let found = index.find("Meier", 1).unwrap().unwrap();
    // Meyer and Maier are both one edit away; ties go to the smaller string.
    assert_eq!(found.term, "Maier");
    assert_eq!(found.distance, 1);
}

#[test]
fn test_case_fold_mapping_shares_paths() {
    let index = IndexBuilder::new()
        .mapping(CaseFold)
        .build(["Berlin", "BERLIN", "berlin"])
        .unwrap();

    assert_eq!(index.len(), 3);
    assert_eq!(index.node_count(), 7);
    assert!(index.contains("BERLIN").unwrap());
    assert!(!index.contains("BeRlIn").unwrap());
}

#[test]
fn test_unicode_counts_scalar_values() {
    let index = StateSetIndex::build(["naïve", "café", "日本語"], Identity, 6).unwrap();

    let found = index.find("naive", 1).unwrap().unwrap();
    assert_eq!((found.term.as_str(), found.distance), ("naïve", 1));

    let found = index.find("日本", 1).unwrap().unwrap();
    assert_eq!((found.term.as_str(), found.distance), ("日本語", 1));
}

#[test]
fn test_index_shared_across_threads() {
    let index = std::sync::Arc::new(StateSetIndex::build(NAMES, worked_example_mapping(), 6).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let index = std::sync::Arc::clone(&index);
            std::thread::spawn(move || index.find("Mustre", 2).unwrap())
        })
        .collect();

    for handle in handles {
        let found = handle.join().unwrap().unwrap();
        assert_eq!(found.term, "Muster");
    }
}

#[test]
fn test_terms_in_insertion_order() {
    let index = StateSetIndex::build(["b", "a", "b", "c"], Identity, 2).unwrap();
    assert_eq!(index.terms().collect::<Vec<_>>(), vec!["b", "a", "c"]);
}
