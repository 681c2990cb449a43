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

use std::cmp::Ordering;

#[derive(PartialEq, Debug)]
pub struct ScoredCoin {
    pub coin: u32,
    pub score: f64,
}

/* Ordering for descending sorts by score */
fn cmp_descending(scored_coin_a: &ScoredCoin, scored_coin_b: &ScoredCoin) -> Ordering {
    match scored_coin_a.score.partial_cmp(&scored_coin_b.score) {
        Some(Ordering::Less) => Ordering::Greater,
        Some(Ordering::Greater) => Ordering::Less,
        Some(Ordering::Equal) => Ordering::Equal,
        None => Ordering::Equal,
    }
}

impl Eq for ScoredCoin {}

impl Ord for ScoredCoin {
    fn cmp(&self, other: &ScoredCoin) -> Ordering {
        cmp_descending(self, other)
    }
}

impl PartialOrd for ScoredCoin {
    fn partial_cmp(&self, other: &ScoredCoin) -> Option<Ordering> {
        Some(cmp_descending(self, other))
    }
}

/// The positions of the up to `how_many` most similar coins, by descending
/// score. The sort is stable, so coins with equal scores stay in row order.
/// The coin itself is skipped by position, never by its score, which would
/// misfire for coins with a blank description.
pub fn top_related(similarities: &[f64], coin: u32, how_many: usize) -> Vec<u32> {

    let mut scored_coins: Vec<ScoredCoin> = similarities.iter()
        .enumerate()
        .map(|(other_coin, score)| {
            ScoredCoin { coin: other_coin as u32, score: *score }
        })
        .collect();

    scored_coins.sort();

    scored_coins.iter()
        .filter(|scored_coin| scored_coin.coin != coin)
        .take(how_many)
        .map(|scored_coin| scored_coin.coin)
        .collect()
}
