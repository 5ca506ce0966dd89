use std::fs;

use qa_matcher::{
    find_match, load_path, CorpusIndex, Error, LoadOptions, MalformedPolicy,
};
use tempfile::TempDir;

const DATASET: &str = "\
Question,Answer
What is Twitter?,A social media platform.
\"How do I reset my password?\",\"Go to settings, then click \"\"reset\"\".\"
How do I delete my account?,\"Open settings.
Choose deactivate.\"
";

#[test]
fn load_file_and_answer() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("faq.csv");
    fs::write(&path, DATASET).unwrap();

    let report = load_path(&path, &LoadOptions::default()).expect("load");
    assert!(report.skipped_lines.is_empty());
    let index = CorpusIndex::build(report.into_entries()).expect("build");
    assert_eq!(index.len(), 3);

    let result = find_match("forgot password", &index);
    assert_eq!(result.matched_question, "How do I reset my password?");
    assert_eq!(result.matched_answer, "Go to settings, then click \"reset\".");

    let result = find_match("delete account", &index);
    assert_eq!(result.matched_answer, "Open settings.\nChoose deactivate.");
}

#[test]
fn missing_file_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = load_path(tmp.path().join("nope.csv"), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn header_only_dataset_cannot_build() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("empty.csv");
    fs::write(&path, "Question,Answer\n").unwrap();

    let entries = load_path(&path, &LoadOptions::default()).unwrap().into_entries();
    assert!(entries.is_empty());
    assert!(matches!(CorpusIndex::build(entries), Err(Error::EmptyCorpus)));
}

#[test]
fn malformed_row_policy() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bad.tsv");
    fs::write(&path, "Question\tAnswer\nq one\ta one\nbroken row\n\"unterminated\tx\n").unwrap();

    let reject = LoadOptions {
        delimiter: '\t',
        ..LoadOptions::default()
    };
    let err = load_path(&path, &reject).unwrap_err();
    assert!(matches!(err, Error::MalformedRecord { line: 3, .. }));

    let skip = LoadOptions {
        malformed_policy: MalformedPolicy::Skip,
        ..reject
    };
    let report = load_path(&path, &skip).unwrap();
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.skipped_lines, vec![3, 4]);
}

#[test]
fn custom_column_names() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("custom.csv");
    fs::write(&path, "prompt,reply\nIs it open?,Yes.\n").unwrap();

    let options = LoadOptions {
        question_column: "prompt".to_string(),
        answer_column: "reply".to_string(),
        ..LoadOptions::default()
    };
    let entries = load_path(&path, &options).unwrap().into_entries();
    assert_eq!(entries[0].question, "Is it open?");
    assert_eq!(entries[0].answer, "Yes.");

    let err = load_path(&path, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, Error::MissingColumn(_)));
}
