use types::{new_similarity_matrix, SimilarityMatrix, TermWeights};

/// Cosine similarity between all pairs of coin vectors. The vectors have
/// unit length, so the similarity is their dot product. Vectors without
/// terms have no direction, their similarity to everything (themselves
/// included) is 0 rather than NaN.
pub fn pairwise_similarities(vectors: &[TermWeights]) -> SimilarityMatrix {

    let num_coins = vectors.len();
    let mut similarities = new_similarity_matrix(num_coins);

    for coin in 0..num_coins {
        if !vectors[coin].is_empty() {
            similarities[coin][coin] = 1.0;
        }

        for other_coin in (coin + 1)..num_coins {
            let similarity = dot(&vectors[coin], &vectors[other_coin]);

            similarities[coin][other_coin] = similarity;
            similarities[other_coin][coin] = similarity;
        }
    }

    similarities
}

/// Sparse dot product, walking two weight lists with ascending dimensions.
fn dot(a: &[(u32, f64)], b: &[(u32, f64)]) -> f64 {

    let mut product = 0.0;

    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        let (dimension_a, weight_a) = a[i];
        let (dimension_b, weight_b) = b[j];

        if dimension_a < dimension_b {
            i += 1;
        } else if dimension_b < dimension_a {
            j += 1;
        } else {
            product += weight_a * weight_b;
            i += 1;
            j += 1;
        }
    }

    product
}

#[cfg(test)]
mod tests {

    use corpus::Corpus;
    use similarity;
    use types::TermWeights;
    use vectorize;

    fn close_enough_to(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.000000001
    }

    #[test]
    fn similarities_are_symmetric_with_a_unit_diagonal() {
        let vectors: Vec<TermWeights> = vec![
            vec![(0, 1.0)],
            vec![(0, 0.6), (1, 0.8)],
            vec![(1, 1.0)],
        ];

        let similarities = similarity::pairwise_similarities(&vectors);

        for coin in 0..3 {
            assert!(close_enough_to(similarities[coin][coin], 1.0));

            for other_coin in 0..3 {
                assert!(close_enough_to(
                    similarities[coin][other_coin],
                    similarities[other_coin][coin],
                ));
            }
        }

        assert!(close_enough_to(similarities[0][1], 0.6));
        assert!(close_enough_to(similarities[1][2], 0.8));
        assert!(close_enough_to(similarities[0][2], 0.0));
    }

    #[test]
    fn vectors_without_terms_are_similar_to_nothing() {
        let vectors: Vec<TermWeights> = vec![vec![(0, 1.0)], vec![], vec![]];

        let similarities = similarity::pairwise_similarities(&vectors);

        assert!(close_enough_to(similarities[1][1], 0.0));
        assert!(close_enough_to(similarities[1][0], 0.0));
        assert!(close_enough_to(similarities[1][2], 0.0));
    }

    #[test]
    fn disjoint_vectors_have_zero_similarity() {
        let vectors: Vec<TermWeights> = vec![
            vec![(0, 0.6), (2, 0.8)],
            vec![(1, 0.8), (3, 0.6)],
        ];

        let similarities = similarity::pairwise_similarities(&vectors);

        assert!(close_enough_to(similarities[0][1], 0.0));
    }

    #[test]
    fn shared_terms_drive_the_similarity() {
        let input = "coinId,description\n\
                     bitcoin,bitcoin digital currency\n\
                     bitcoin-cash,bitcoin cryptocurrency\n";

        let corpus = Corpus::from_csv_reader(input.as_bytes()).unwrap();
        let (_, vectors) = vectorize::fit_transform(&corpus);

        let similarities = similarity::pairwise_similarities(&vectors);

        // both descriptions share "bitcoin", which appears in every document
        let idf_shared = 1.0;
        let idf_rare = (3.0_f64 / 2.0).ln() + 1.0;

        let norm_a = (idf_shared + 2.0 * idf_rare * idf_rare).sqrt();
        let norm_b = (idf_shared + idf_rare * idf_rare).sqrt();
        let expected = idf_shared / (norm_a * norm_b);

        assert!(close_enough_to(similarities[0][1], expected));
    }

    #[test]
    fn identical_descriptions_are_fully_similar() {
        let input = "coinId,description\n\
                     bitcoin,peer to peer electronic cash\n\
                     bitcoin-clone,peer to peer electronic cash\n";

        let corpus = Corpus::from_csv_reader(input.as_bytes()).unwrap();
        let (_, vectors) = vectorize::fit_transform(&corpus);

        let similarities = similarity::pairwise_similarities(&vectors);

        assert!(close_enough_to(similarities[0][1], 1.0));
    }
}
