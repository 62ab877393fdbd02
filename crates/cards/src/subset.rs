// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards subsets iteration.
use crate::Card;

/// Calls the `f` closure for each k-subset of the given cards.
///
/// Subsets are visited in colexicographic order of the cards positions, the
/// first subset is `cards[0..k]`. Nothing is visited if `k` is zero or larger
/// than the number of cards.
pub fn for_each_subset<F>(cards: &[Card], k: usize, mut f: F)
where
    F: FnMut(&[Card]),
{
    let n = cards.len();
    if k == 0 || k > n {
        return;
    }

    // Algorithm L from TAOCP 4a, c[1..=k] are the positions, c[k + 1] and
    // c[k + 2] are sentinels.
    let mut c = vec![0usize; k + 3];
    for (j, pos) in c.iter_mut().enumerate().take(k + 1).skip(1) {
        *pos = j - 1;
    }
    c[k + 1] = n;

    let mut h = cards[..k].to_vec();
    loop {
        for (idx, &pos) in c[1..=k].iter().enumerate() {
            h[idx] = cards[pos];
        }

        f(&h);

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}
