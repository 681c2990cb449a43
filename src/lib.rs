extern crate fnv;
extern crate scoped_pool;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;

use std::cmp;
use std::sync::Mutex;
use std::time::Instant;

use scoped_pool::Pool;

pub mod corpus;
pub mod errors;
pub mod io;
pub mod similarity;
pub mod stopwords;
pub mod types;
pub mod utils;
pub mod vectorize;

mod rank;


use corpus::Corpus;
use errors::Error;
use types::{SimilarityMatrix, TermMatrix};
use vectorize::Vocabulary;

/// Number of related coins to compute per coin if not specified otherwise.
pub const DEFAULT_NUM_RELATED: usize = 5;

/// Vectorized view of a corpus together with the precomputed cosine
/// similarities between all pairs of coins. All ranking queries run against
/// this index.
pub struct SimilarityIndex {
    vocabulary: Vocabulary,
    vectors: TermMatrix,
    similarities: SimilarityMatrix,
}

impl SimilarityIndex {

    /// Learns the vocabulary of the corpus, turns every description into a
    /// tf-idf vector and precomputes the full similarity matrix.
    pub fn fit(corpus: &Corpus) -> SimilarityIndex {

        let vectorization_start = Instant::now();
        let (vocabulary, vectors) = vectorize::fit_transform(corpus);

        eprintln!(
            "Vectorized {} coin descriptions over {} terms, took {}ms",
            corpus.num_coins(),
            vocabulary.num_terms(),
            utils::to_millis(vectorization_start.elapsed()),
        );

        let similarity_start = Instant::now();
        let similarities = similarity::pairwise_similarities(&vectors);

        eprintln!(
            "Computed {} pairwise similarities, took {}ms",
            corpus.num_coins() * corpus.num_coins(),
            utils::to_millis(similarity_start.elapsed()),
        );

        SimilarityIndex { vocabulary, vectors, similarities }
    }

    /// Ranks all other corpus coins by how similar their descriptions are to
    /// the one of `coin_id` and returns the ids of the top `how_many`. Coins
    /// with equal similarity keep their corpus order, and the queried coin
    /// never recommends itself.
    pub fn related_to(
        &self,
        coin_id: &str,
        corpus: &Corpus,
        how_many: usize,
    ) -> Result<Vec<String>, Error> {

        let coin = match corpus.position(coin_id) {
            Some(position) => position,
            None => return Err(Error::UnknownCoin(coin_id.to_string())),
        };

        let related_positions =
            rank::top_related(&self.similarities[coin as usize], coin, how_many);

        let related_ids = related_positions.iter()
            .map(|&position| corpus.coin_id(position).to_string())
            .collect();

        Ok(related_ids)
    }

    pub fn similarity(&self, coin: u32, other_coin: u32) -> f64 {
        self.similarities[coin as usize][other_coin as usize]
    }

    pub fn num_coins(&self) -> usize {
        self.vectors.len()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

/// Computes the related coins of every corpus coin, in corpus order,
/// spreading the ranking work over `pool_size` worker threads.
pub fn related_for_all(
    corpus: &Corpus,
    index: &SimilarityIndex,
    pool_size: usize,
    how_many: usize,
) -> Result<Vec<Vec<String>>, Error> {

    let num_coins = corpus.num_coins();

    let mut slots: Vec<Mutex<Result<Vec<String>, Error>>> = Vec::with_capacity(num_coins);
    for _ in 0..num_coins {
        slots.push(Mutex::new(Ok(Vec::new())));
    }

    let pool = Pool::new(cmp::max(pool_size, 1));

    pool.scoped(|scope| {
        for coin in 0..num_coins {

            let slot = &slots[coin];

            scope.execute(move || {
                let coin_id = corpus.coin_id(coin as u32);
                let related = index.related_to(coin_id, corpus, how_many);

                let mut result = slot.lock().unwrap();
                *result = related;
            });
        }
    });

    let mut all_related = Vec::with_capacity(num_coins);
    for slot in slots {
        all_related.push(slot.into_inner().unwrap()?);
    }

    Ok(all_related)
}
