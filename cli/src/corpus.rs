use anyhow::{Context, Result};
use search_core::{EngineConfig, SearchEngine};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
struct InputDoc {
    #[serde(alias = "body")]
    text: String,
}

/// Load documents from a file or a directory of `.txt`, `.json` and `.jsonl` files.
///
/// Directories are walked in sorted path order so ids are stable between runs.
pub fn load_corpus(input: &Path) -> Result<Vec<String>> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && matches!(extension(p), Some("txt" | "json" | "jsonl")) {
                files.push(p.to_path_buf());
            }
        }
    } else {
        files.push(input.to_path_buf());
    }

    let mut documents = Vec::new();
    for file in files {
        match extension(&file) {
            Some("jsonl") => load_jsonl(&file, &mut documents)?,
            Some("json") => load_json(&file, &mut documents)?,
            _ => load_lines(&file, &mut documents)?,
        }
    }
    tracing::info!(input = %input.display(), num_docs = documents.len(), "loaded corpus");
    Ok(documents)
}

/// Build an engine over `documents`, assigning ids in load order.
pub fn build_engine(stop_words: &str, documents: &[String], config: EngineConfig) -> Result<SearchEngine> {
    let mut engine = SearchEngine::with_config(config);
    engine.configure_stop_words(stop_words);
    for (doc_id, text) in (0..).zip(documents) {
        engine.add_document(doc_id, text)?;
    }
    tracing::info!(num_docs = engine.document_count(), num_terms = engine.index().vocabulary_size(), "index built");
    Ok(engine)
}

fn extension(path: &Path) -> Option<&str> { path.extension().and_then(|s| s.to_str()) }

fn open(file: &Path) -> Result<BufReader<File>> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    Ok(BufReader::new(f))
}

fn load_lines(file: &Path, documents: &mut Vec<String>) -> Result<()> {
    for line in open(file)?.lines() {
        documents.push(line.with_context(|| format!("reading {}", file.display()))?);
    }
    Ok(())
}

fn load_jsonl(file: &Path, documents: &mut Vec<String>) -> Result<()> {
    for (line_no, line) in open(file)?.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let doc: InputDoc = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid document", file.display(), line_no + 1))?;
        documents.push(doc.text);
    }
    Ok(())
}

fn load_json(file: &Path, documents: &mut Vec<String>) -> Result<()> {
    let json: serde_json::Value = serde_json::from_reader(open(file)?)
        .with_context(|| format!("parsing {}", file.display()))?;
    match json {
        serde_json::Value::Array(arr) => {
            for v in arr {
                let doc: InputDoc = serde_json::from_value(v)?;
                documents.push(doc.text);
            }
        }
        serde_json::Value::Object(_) => {
            let doc: InputDoc = serde_json::from_value(json)?;
            documents.push(doc.text);
        }
        _ => anyhow::bail!("{}: expected a document object or an array of them", file.display()),
    }
    Ok(())
}
