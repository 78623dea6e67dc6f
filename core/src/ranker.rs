//! TF-IDF scoring and top-K selection.
//!
//! Ranking order is relevance descending, then document id ascending. Both
//! selection strategies use that order, so they always return the same list:
//!
//! - [`TopKStrategy::FullSort`]: sort every candidate, keep the first K. `O(n log n)`.
//! - [`TopKStrategy::BoundedHeap`]: keep a K-sized heap whose top is the weakest
//!   kept hit, replace it when a better candidate shows up. `O(n log K)`.

use crate::index::InvertedIndex;
use crate::query::Query;
use crate::{DocId, ScoredDocument};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopKStrategy {
    #[default]
    FullSort,
    BoundedHeap,
}

/// Total ranking order: `Less` means `a` ranks ahead of `b`.
pub fn compare_ranked(a: &ScoredDocument, b: &ScoredDocument) -> Ordering {
    b.relevance
        .total_cmp(&a.relevance)
        .then_with(|| a.document_id.cmp(&b.document_id))
}

/// Score every document matching a plus term, then drop every document hit by a
/// minus term. Returned in ascending id order.
pub fn find_all_documents(index: &InvertedIndex, query: &Query) -> Vec<ScoredDocument> {
    if index.document_count() == 0 {
        return Vec::new();
    }

    let mut doc_to_relevance: BTreeMap<DocId, f64> = BTreeMap::new();
    for term in &query.plus_terms {
        let Some(idf) = index.idf(term) else { continue };
        for &doc_id in index.lookup(term) {
            let tf = index.term_frequency(doc_id, term).unwrap_or(0.0);
            *doc_to_relevance.entry(doc_id).or_insert(0.0) += tf * idf;
        }
    }

    // exclusion runs after scoring
    for term in &query.minus_terms {
        for doc_id in index.lookup(term) {
            doc_to_relevance.remove(doc_id);
        }
    }

    doc_to_relevance
        .into_iter()
        .map(|(doc_id, relevance)| ScoredDocument::new(doc_id, relevance))
        .collect()
}

/// Keep the `k` best candidates, best first.
pub fn select_top_k(mut candidates: Vec<ScoredDocument>, k: usize, strategy: TopKStrategy) -> Vec<ScoredDocument> {
    match strategy {
        TopKStrategy::FullSort => {
            candidates.sort_by(compare_ranked);
            candidates.truncate(k);
            candidates
        }
        TopKStrategy::BoundedHeap => bounded_heap_top_k(candidates, k),
    }
}

/// Heap entry whose `Ord` is `compare_ranked`, so the top of the max-heap is the weakest kept hit.
#[derive(Debug, Clone, Copy)]
struct Ranked(ScoredDocument);

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool { self.cmp(other) == Ordering::Equal }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering { compare_ranked(&self.0, &other.0) }
}

fn bounded_heap_top_k(candidates: Vec<ScoredDocument>, k: usize) -> Vec<ScoredDocument> {
    if k == 0 {
        return Vec::new();
    }
    let mut candidates = candidates.into_iter();
    let mut heap: BinaryHeap<Ranked> = candidates.by_ref().take(k).map(Ranked).collect();
    for candidate in candidates {
        if let Some(mut weakest) = heap.peek_mut() {
            if compare_ranked(&candidate, &weakest.0) == Ordering::Less {
                *weakest = Ranked(candidate);
            }
        }
    }
    heap.into_sorted_vec().into_iter().map(|Ranked(doc)| doc).collect()
}
