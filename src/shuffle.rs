//! Unbiased shuffling over a raw random byte source.
//!
//! Indices are drawn by rejection sampling: a draw is accepted only when it
//! falls inside the largest multiple of `n` that fits the draw's range, so
//! `draw % n` carries no modulo bias.

use rand::RngCore;

/// Draws a uniformly distributed index in `0..n`.
///
/// Ranges up to 256 consume one byte per attempt; wider ranges fall back to
/// 64-bit words with the same acceptance rule. Returns 0 when `n <= 1`.
pub fn uniform_index<R: RngCore + ?Sized>(rng: &mut R, n: usize) -> usize {
    if n <= 1 {
        return 0;
    }

    if n <= 256 {
        let limit = n * (256 / n);
        loop {
            let mut byte = [0u8; 1];
            rng.fill_bytes(&mut byte);
            let value = usize::from(byte[0]);
            if value < limit {
                return value % n;
            }
        }
    }

    let n = n as u64;
    // 2^64 mod n values at the top of the range would skew the result.
    let excess = (u64::MAX % n + 1) % n;
    loop {
        let value = rng.next_u64();
        if value <= u64::MAX - excess {
            return (value % n) as usize;
        }
    }
}

/// Shuffles `items` in place with Fisher-Yates, walking from the end.
pub fn shuffle<T, R: RngCore + ?Sized>(items: &mut [T], rng: &mut R) {
    let mut n = items.len();
    while n > 1 {
        let k = uniform_index(rng, n);
        n -= 1;
        items.swap(k, n);
    }
}
