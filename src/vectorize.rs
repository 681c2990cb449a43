extern crate fnv;

use fnv::FnvHashMap;

use corpus::Corpus;
use stopwords;
use types::{TermMatrix, TermWeights};

/// The terms retained from a corpus, in lexicographic order, together with
/// their smoothed inverse document frequencies. Dimension numbers of the
/// term vectors index into this vocabulary.
pub struct Vocabulary {
    terms: Vec<String>,
    positions: FnvHashMap<String, u32>,
    inverse_document_frequencies: Vec<f64>,
}

impl Vocabulary {

    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    pub fn term(&self, dimension: u32) -> &str {
        &self.terms[dimension as usize]
    }

    pub fn position(&self, term: &str) -> Option<u32> {
        self.positions.get(term).cloned()
    }

    pub fn inverse_document_frequency(&self, dimension: u32) -> f64 {
        self.inverse_document_frequencies[dimension as usize]
    }
}

/// Learns the vocabulary of a corpus and turns every description into an
/// l2-normalized tf-idf vector, stored sparsely as (dimension, weight)
/// pairs with ascending dimensions. Descriptions without retained terms
/// become empty vectors.
pub fn fit_transform(corpus: &Corpus) -> (Vocabulary, TermMatrix) {

    let tokenized: Vec<Vec<String>> = corpus.documents().iter()
        .map(|document| tokenize(&document.description))
        .collect();

    let mut document_frequencies: FnvHashMap<&str, usize> =
        FnvHashMap::with_capacity_and_hasher(1_000, Default::default());

    for tokens in &tokenized {
        let mut terms_in_document: Vec<&str> =
            tokens.iter().map(|token| token.as_str()).collect();
        terms_in_document.sort();
        terms_in_document.dedup();

        for term in terms_in_document {
            *document_frequencies.entry(term).or_insert(0) += 1;
        }
    }

    let mut terms: Vec<String> = document_frequencies.keys()
        .map(|term| term.to_string())
        .collect();
    terms.sort();

    let mut positions: FnvHashMap<String, u32> =
        FnvHashMap::with_capacity_and_hasher(terms.len(), Default::default());
    let mut inverse_document_frequencies: Vec<f64> = Vec::with_capacity(terms.len());

    for (index, term) in terms.iter().enumerate() {
        positions.insert(term.clone(), index as u32);

        let document_frequency = document_frequencies[term.as_str()];
        inverse_document_frequencies.push(
            smoothed_idf(corpus.num_coins(), document_frequency));
    }

    let vectors: TermMatrix = tokenized.iter()
        .map(|tokens| term_weights(tokens, &positions, &inverse_document_frequencies))
        .collect();

    let vocabulary = Vocabulary { terms, positions, inverse_document_frequencies };

    (vocabulary, vectors)
}

/// Lowercases a description and splits it into maximal runs of alphanumeric
/// characters and underscores. Runs shorter than two characters and stop
/// words are discarded.
fn tokenize(description: &str) -> Vec<String> {
    description
        .to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .filter(|token| !stopwords::is_stop_word(token))
        .map(|token| token.to_string())
        .collect()
}

/// Inverse document frequency with corpus and frequency smoothing, so that
/// unseen terms cannot divide by zero and no term is weighted to zero.
fn smoothed_idf(num_documents: usize, document_frequency: usize) -> f64 {
    ((1.0 + num_documents as f64) / (1.0 + document_frequency as f64)).ln() + 1.0
}

fn term_weights(
    tokens: &[String],
    positions: &FnvHashMap<String, u32>,
    inverse_document_frequencies: &[f64],
) -> TermWeights {

    let mut term_counts: FnvHashMap<&str, usize> =
        FnvHashMap::with_capacity_and_hasher(tokens.len(), Default::default());

    for token in tokens {
        *term_counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let mut weights: TermWeights = term_counts.iter()
        .map(|(term, count)| {
            let dimension = positions[*term];
            let weight = *count as f64 * inverse_document_frequencies[dimension as usize];

            (dimension, weight)
        })
        .collect();

    weights.sort_by_key(|&(dimension, _)| dimension);

    let norm = weights.iter()
        .map(|&(_, weight)| weight * weight)
        .sum::<f64>()
        .sqrt();

    if norm > 0.0 {
        for entry in weights.iter_mut() {
            entry.1 /= norm;
        }
    }

    weights
}
