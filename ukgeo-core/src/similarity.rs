//! Block-matching string similarity (Ratcliff/Obershelp).
//!
//! The longest common block is searched first, then the
//! unmatched parts to its left and right are processed the
//! same way until no more common characters are found.
//!
//! Among several longest blocks the one starting first in
//! `a` wins, then the one starting first in `b`. This choice
//! determines how the remainders are split and therefore
//! influences the final score, i.e. the score is not
//! necessarily symmetric.

/// A common block `a[a_start..a_start + len] == b[b_start..b_start + len]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub a_start: usize,
    pub b_start: usize,
    pub len: usize,
}

/// Find the longest common block of `a[alo..ahi]` and `b[blo..bhi]`.
fn find_longest_match(
    a: &[char],
    (alo, ahi): (usize, usize),
    b: &[char],
    (blo, bhi): (usize, usize),
) -> Block {
    let mut best = Block {
        a_start: alo,
        b_start: blo,
        len: 0,
    };
    // prev[j + 1 - blo]: length of the common suffix
    // of a[..i] and b[..=j], i.e. of the previous row.
    let width = bhi - blo;
    let mut prev = vec![0usize; width + 1];
    let mut curr = vec![0usize; width + 1];
    for i in alo..ahi {
        for j in blo..bhi {
            let col = j - blo;
            curr[col + 1] = if a[i] == b[j] { prev[col] + 1 } else { 0 };
            // Strictly greater: the first (leftmost) block wins
            let len = curr[col + 1];
            if len > best.len {
                best = Block {
                    a_start: i + 1 - len,
                    b_start: j + 1 - len,
                    len,
                };
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    best
}

/// All common blocks, ordered by their position.
pub fn matching_blocks(a: &str, b: &str) -> Vec<Block> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut blocks = Vec::new();
    let mut pending = vec![((0, a.len()), (0, b.len()))];
    while let Some(((alo, ahi), (blo, bhi))) = pending.pop() {
        if alo >= ahi || blo >= bhi {
            continue;
        }
        let block = find_longest_match(&a, (alo, ahi), &b, (blo, bhi));
        if block.len == 0 {
            continue;
        }
        blocks.push(block);
        let a_end = block.a_start + block.len;
        let b_end = block.b_start + block.len;
        pending.push(((alo, block.a_start), (blo, block.b_start)));
        pending.push(((a_end, ahi), (b_end, bhi)));
    }
    blocks.sort_unstable_by_key(|b| (b.a_start, b.b_start));
    blocks
}

/// Similarity of `a` and `b` in the range [0, 1].
///
/// Computed as `2 * M / T` with `M` the number of matching
/// characters and `T` the total number of characters in both
/// strings. Two empty strings are considered equal.
pub fn similarity(a: &str, b: &str) -> f64 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 1.0;
    }
    let matched: usize = matching_blocks(a, b).iter().map(|b| b.len).sum();
    2.0 * matched as f64 / total as f64
}
