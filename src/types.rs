/**
 * Relco
 * Copyright (C) 2026 the relco developers
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

/// Sparse tf-idf vector of one description: (vocabulary dimension, weight)
/// pairs, sorted by dimension.
pub type TermWeights = Vec<(u32, f64)>;

pub type TermMatrix = Vec<TermWeights>;

/// Dense square matrix of pairwise cosine similarities, one row per coin.
pub type SimilarityMatrix = Vec<Vec<f64>>;

pub fn new_similarity_matrix(num_coins: usize) -> SimilarityMatrix {
    vec![vec![0.0; num_coins]; num_coins]
}
