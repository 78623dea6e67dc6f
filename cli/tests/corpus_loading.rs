use search_cli::{build_engine, load_config, load_corpus};
use search_core::{EngineConfig, TopKStrategy};
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_text_lines_in_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("docs.txt");
    fs::write(&path, "white cat\nwhite dog\nwhite cat and dog\n").unwrap();
    let docs = load_corpus(&path).unwrap();
    assert_eq!(docs, vec!["white cat", "white dog", "white cat and dog"]);

    let engine = build_engine("and", &docs, EngineConfig::default()).unwrap();
    let ids: Vec<u32> = engine.find_top_documents("white cat").iter().map(|d| d.document_id).collect();
    assert_eq!(ids, vec![0, 2, 1]);
}

#[test]
fn walks_directory_in_sorted_order() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.jsonl"), "{\"text\": \"third\"}\n\n{\"body\": \"fourth\"}\n").unwrap();
    fs::write(dir.path().join("a.json"), "[{\"text\": \"first\"}, {\"text\": \"second\"}]").unwrap();
    fs::write(dir.path().join("c.md"), "ignored").unwrap();
    let docs = load_corpus(dir.path()).unwrap();
    assert_eq!(docs, vec!["first", "second", "third", "fourth"]);
}

#[test]
fn rejects_malformed_jsonl() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.jsonl");
    fs::write(&path, "{\"title\": \"no text\"}\n").unwrap();
    let err = load_corpus(&path).unwrap_err();
    assert!(err.to_string().contains("bad.jsonl:1"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(load_corpus(&dir.path().join("absent.txt")).is_err());
}

#[test]
fn config_file_overrides_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("engine.json");
    fs::write(&path, "{\"max_results\": 2, \"strategy\": \"bounded_heap\"}").unwrap();
    let config = load_config(&path).unwrap();
    assert_eq!(config, EngineConfig { max_results: 2, strategy: TopKStrategy::BoundedHeap });

    fs::write(&path, "{}").unwrap();
    assert_eq!(load_config(&path).unwrap(), EngineConfig::default());
}
