use std::{sync::Arc, thread};

use qa_matcher::{
    find_match, CorpusEntry, CorpusIndex, Error, Matcher, ScanStrategy, SublinearTFIDFEngine,
    Tokenizer,
};

fn twitter_corpus() -> Vec<CorpusEntry> {
    vec![
        CorpusEntry::new("What is Twitter?", "A social media platform."),
        CorpusEntry::new("How do I reset my password?", "Go to settings and click reset."),
    ]
}

fn faq_corpus() -> Vec<CorpusEntry> {
    vec![
        CorpusEntry::new("What is Twitter?", "A social media platform."),
        CorpusEntry::new("How do I reset my password?", "Go to settings and click reset."),
        CorpusEntry::new("How do I delete my account?", "Open settings and choose deactivate."),
        CorpusEntry::new("Can I edit a tweet after posting?", "Only with a subscription."),
        CorpusEntry::new("How do I change my username?", "Settings, then Account, then Username."),
        CorpusEntry::new("Why was my account suspended?", "It may have broken the rules."),
        CorpusEntry::new("How can I make my tweets private?", "Turn on Protect your posts."),
    ]
}

#[test]
fn password_query_matches_password_entry() {
    let index = CorpusIndex::build(twitter_corpus()).unwrap();
    let result = find_match("how to change my password", &index);
    assert_eq!(result.matched_question, "How do I reset my password?");
    assert_eq!(result.matched_answer, "Go to settings and click reset.");
    assert_eq!(result.index, 1);
    assert!(result.score > 0.0);
}

#[test]
fn unrelated_query_falls_back_to_first_entry() {
    let index = CorpusIndex::build(twitter_corpus()).unwrap();
    let result = find_match("banana spaceship", &index);
    assert_eq!(result.matched_question, "What is Twitter?");
    assert_eq!(result.index, 0);
    assert_eq!(result.score, 0.0);
}

#[test]
fn empty_and_punctuation_queries_still_match() {
    let index = CorpusIndex::build(faq_corpus()).unwrap();
    for query in ["", "   ", "?!...", "x y z"] {
        let result = find_match(query, &index);
        assert_eq!(result.index, 0, "query {:?}", query);
        assert_eq!(result.score, 0.0);
    }
}

#[test]
fn empty_corpus_is_an_error() {
    assert!(matches!(CorpusIndex::build(Vec::new()), Err(Error::EmptyCorpus)));
}

#[test]
fn every_question_matches_itself() {
    let index = CorpusIndex::build(faq_corpus()).unwrap();
    for (i, entry) in index.entries().iter().enumerate() {
        let result = find_match(&entry.question, &index);
        assert_eq!(result.index, i, "{}", entry.question);
        assert!((result.score - 1.0).abs() < 1e-9);
    }
}

#[test]
fn single_character_terms_keep_questions_apart() {
    let entries = vec![
        CorpusEntry::new("What is Twitter?", "A social media platform."),
        CorpusEntry::new("What is Plan A?", "The free tier."),
        CorpusEntry::new("What is Plan B?", "The paid tier."),
        CorpusEntry::new("Step 1", "Sign up."),
        CorpusEntry::new("Step 2", "Verify your email."),
        CorpusEntry::new("X?", "The old name of the platform."),
    ];
    let index = CorpusIndex::build(entries).unwrap();
    for (i, entry) in index.entries().iter().enumerate() {
        let result = find_match(&entry.question, &index);
        assert_eq!(result.index, i, "{}", entry.question);
        assert!((result.score - 1.0).abs() < 1e-9, "{}", entry.question);
    }
}

#[test]
fn min_term_len_two_merges_single_character_variants() {
    let entries = vec![
        CorpusEntry::new("What is Plan A?", "The free tier."),
        CorpusEntry::new("What is Plan B?", "The paid tier."),
    ];
    let index = CorpusIndex::builder()
        .tokenizer(Tokenizer::new().with_min_term_len(2))
        .build(entries)
        .unwrap();
    let result = find_match("What is Plan B?", &index);
    assert_eq!(result.index, 0);
}

#[test]
fn duplicate_questions_resolve_to_first() {
    let mut entries = faq_corpus();
    entries.push(CorpusEntry::new("what is twitter", "A duplicate with another answer."));
    let index = CorpusIndex::build(entries).unwrap();
    let result = find_match("What is Twitter?", &index);
    assert_eq!(result.index, 0);
    assert_eq!(result.matched_answer, "A social media platform.");
}

#[test]
fn case_and_punctuation_do_not_matter() {
    let index = CorpusIndex::build(faq_corpus()).unwrap();
    let a = find_match("What is Twitter?", &index);
    let b = find_match("what is twitter", &index);
    assert_eq!(a, b);
}

#[test]
fn matching_is_deterministic() {
    let index = CorpusIndex::build(faq_corpus()).unwrap();
    let matcher = Matcher::new(&index);
    for query in ["delete account", "private tweets", "username", "nothing here"] {
        assert_eq!(matcher.find_match(query), matcher.find_match(query));
    }
}

#[test]
fn scan_strategies_agree() {
    let index = CorpusIndex::build(faq_corpus()).unwrap();
    let full = Matcher::with_strategy(&index, ScanStrategy::FullScan);
    let inverted = Matcher::with_strategy(&index, ScanStrategy::InvertedIndex);
    let queries = [
        "how do I",
        "my account",
        "reset password",
        "edit tweet",
        "suspended account why",
        "banana",
        "",
        "What is Twitter?",
    ];
    for query in queries {
        assert_eq!(full.find_match(query), inverted.find_match(query), "query {:?}", query);
    }
}

#[test]
fn full_scan_scores_every_entry() {
    let index = CorpusIndex::build(faq_corpus()).unwrap();
    let hits = Matcher::new(&index).scores("account settings");
    assert_eq!(hits.len(), index.len());
    assert!(hits.list.iter().all(|h| (0.0..=1.0 + 1e-12).contains(&h.score)));
    let inverted = Matcher::with_strategy(&index, ScanStrategy::InvertedIndex).scores("account");
    let shortlist: Vec<usize> = inverted.list.iter().map(|h| h.index).collect();
    assert_eq!(shortlist, vec![2, 5]);
}

#[test]
fn shared_rare_term_beats_common_terms() {
    let index = CorpusIndex::build(faq_corpus()).unwrap();
    // "how" and "do" are common, "username" appears once
    let result = find_match("how do I pick a username", &index);
    assert_eq!(result.index, 4);
}

#[test]
fn alternate_engine_and_tokenizer() {
    let index = CorpusIndex::builder()
        .tokenizer(Tokenizer::new().with_min_term_len(2))
        .engine::<SublinearTFIDFEngine>()
        .build(faq_corpus())
        .unwrap();
    let result = index.matcher().find_match("reset reset reset password");
    assert_eq!(result.index, 1);
}

#[test]
fn index_is_shareable_across_threads() {
    let index = Arc::new(CorpusIndex::build(faq_corpus()).unwrap());
    let expected = find_match("private tweets", &*index);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let index = Arc::clone(&index);
            thread::spawn(move || find_match("private tweets", &*index))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
