//! Blue Midnight Wish 512 (little-endian words, double-pipe final round)

/// Signed expansion terms per first-sixteen quad word: (index, negate)
const W_TERMS: [[(usize, bool); 5]; 16] = [
    [(5, false), (7, true), (10, false), (13, false), (14, false)],
    [(6, false), (8, true), (11, false), (14, false), (15, true)],
    [(0, false), (7, false), (9, false), (12, true), (15, false)],
    [(0, false), (1, true), (8, false), (10, true), (13, false)],
    [(1, false), (2, false), (9, false), (11, true), (14, true)],
    [(3, false), (2, true), (10, false), (12, true), (15, false)],
    [(4, false), (0, true), (3, true), (11, true), (13, false)],
    [(1, false), (4, true), (5, true), (12, true), (14, true)],
    [(2, false), (5, true), (6, true), (13, false), (15, true)],
    [(0, false), (3, true), (6, false), (7, true), (14, false)],
    [(8, false), (1, true), (4, true), (7, true), (15, false)],
    [(8, false), (0, true), (2, true), (5, true), (9, false)],
    [(1, false), (3, false), (6, true), (9, true), (10, false)],
    [(2, false), (4, false), (7, false), (10, false), (11, false)],
    [(3, false), (5, true), (8, false), (11, true), (12, true)],
    [(12, false), (4, true), (6, true), (9, true), (13, false)],
];

fn s0(x: u64) -> u64 {
    (x >> 1) ^ (x << 3) ^ x.rotate_left(4) ^ x.rotate_left(37)
}
fn s1(x: u64) -> u64 {
    (x >> 1) ^ (x << 2) ^ x.rotate_left(13) ^ x.rotate_left(43)
}
fn s2(x: u64) -> u64 {
    (x >> 2) ^ (x << 1) ^ x.rotate_left(19) ^ x.rotate_left(53)
}
fn s3(x: u64) -> u64 {
    (x >> 2) ^ (x << 2) ^ x.rotate_left(28) ^ x.rotate_left(59)
}
fn s4(x: u64) -> u64 {
    (x >> 1) ^ x
}
fn s5(x: u64) -> u64 {
    (x >> 2) ^ x
}

fn k(j: u64) -> u64 {
    j.wrapping_mul(0x0555555555555555)
}

fn le64(bytes: &[u8]) -> u64 {
    let mut w = [0u8; 8];
    w.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(w)
}

fn compress(m: &[u64; 16], h: &[u64; 16]) -> [u64; 16] {
    let mut t = [0u64; 16];
    for i in 0..16 {
        t[i] = m[i] ^ h[i];
    }

    let mut q = [0u64; 32];
    for (u, terms) in W_TERMS.iter().enumerate() {
        let mut w = 0u64;
        for &(idx, negate) in terms {
            w = if negate {
                w.wrapping_sub(t[idx])
            } else {
                w.wrapping_add(t[idx])
            };
        }
        let folded = match u % 5 {
            0 => s0(w),
            1 => s1(w),
            2 => s2(w),
            3 => s3(w),
            _ => s4(w),
        };
        q[u] = folded.wrapping_add(h[(u + 1) & 15]);
    }

    let add_elt = |j: usize| -> u64 {
        let a = m[j % 16].rotate_left((j % 16) as u32 + 1);
        let b = m[(j + 3) % 16].rotate_left(((j + 3) % 16) as u32 + 1);
        let c = m[(j + 10) % 16].rotate_left(((j + 10) % 16) as u32 + 1);
        a.wrapping_add(b)
            .wrapping_sub(c)
            .wrapping_add(k(j as u64 + 16))
            ^ h[(j + 7) % 16]
    };

    // expand1: the two heavy quads
    for i in 16..18 {
        let mut acc = add_elt(i - 16);
        for j in 0..16 {
            let x = q[i - 16 + j];
            acc = acc.wrapping_add(match j % 4 {
                0 => s1(x),
                1 => s2(x),
                2 => s3(x),
                _ => s0(x),
            });
        }
        q[i] = acc;
    }
    // expand2: the cheap rotation form
    for i in 18..32 {
        let acc = add_elt(i - 16)
            .wrapping_add(q[i - 16])
            .wrapping_add(q[i - 15].rotate_left(5))
            .wrapping_add(q[i - 14])
            .wrapping_add(q[i - 13].rotate_left(11))
            .wrapping_add(q[i - 12])
            .wrapping_add(q[i - 11].rotate_left(27))
            .wrapping_add(q[i - 10])
            .wrapping_add(q[i - 9].rotate_left(32))
            .wrapping_add(q[i - 8])
            .wrapping_add(q[i - 7].rotate_left(37))
            .wrapping_add(q[i - 6])
            .wrapping_add(q[i - 5].rotate_left(43))
            .wrapping_add(q[i - 4])
            .wrapping_add(q[i - 3].rotate_left(53))
            .wrapping_add(s4(q[i - 2]))
            .wrapping_add(s5(q[i - 1]));
        q[i] = acc;
    }

    let mut xl = 0u64;
    for &word in &q[16..24] {
        xl ^= word;
    }
    let mut xh = xl;
    for &word in &q[24..32] {
        xh ^= word;
    }

    let mut out = [0u64; 16];
    out[0] = ((xh << 5) ^ (q[16] >> 5) ^ m[0]).wrapping_add(xl ^ q[24] ^ q[0]);
    out[1] = ((xh >> 7) ^ (q[17] << 8) ^ m[1]).wrapping_add(xl ^ q[25] ^ q[1]);
    out[2] = ((xh >> 5) ^ (q[18] << 5) ^ m[2]).wrapping_add(xl ^ q[26] ^ q[2]);
    out[3] = ((xh >> 1) ^ (q[19] << 5) ^ m[3]).wrapping_add(xl ^ q[27] ^ q[3]);
    out[4] = ((xh >> 3) ^ q[20] ^ m[4]).wrapping_add(xl ^ q[28] ^ q[4]);
    out[5] = ((xh << 6) ^ (q[21] >> 6) ^ m[5]).wrapping_add(xl ^ q[29] ^ q[5]);
    out[6] = ((xh >> 4) ^ (q[22] << 6) ^ m[6]).wrapping_add(xl ^ q[30] ^ q[6]);
    out[7] = ((xh >> 11) ^ (q[23] << 2) ^ m[7]).wrapping_add(xl ^ q[31] ^ q[7]);
    out[8] = out[4]
        .rotate_left(9)
        .wrapping_add(xh ^ q[24] ^ m[8])
        .wrapping_add((xl << 8) ^ q[23] ^ q[8]);
    out[9] = out[5]
        .rotate_left(10)
        .wrapping_add(xh ^ q[25] ^ m[9])
        .wrapping_add((xl >> 6) ^ q[16] ^ q[9]);
    out[10] = out[6]
        .rotate_left(11)
        .wrapping_add(xh ^ q[26] ^ m[10])
        .wrapping_add((xl << 6) ^ q[17] ^ q[10]);
    out[11] = out[7]
        .rotate_left(12)
        .wrapping_add(xh ^ q[27] ^ m[11])
        .wrapping_add((xl << 4) ^ q[18] ^ q[11]);
    out[12] = out[0]
        .rotate_left(13)
        .wrapping_add(xh ^ q[28] ^ m[12])
        .wrapping_add((xl >> 3) ^ q[19] ^ q[12]);
    out[13] = out[1]
        .rotate_left(14)
        .wrapping_add(xh ^ q[29] ^ m[13])
        .wrapping_add((xl >> 4) ^ q[20] ^ q[13]);
    out[14] = out[2]
        .rotate_left(15)
        .wrapping_add(xh ^ q[30] ^ m[14])
        .wrapping_add((xl >> 7) ^ q[21] ^ q[14]);
    out[15] = out[3]
        .rotate_left(16)
        .wrapping_add(xh ^ q[31] ^ m[15])
        .wrapping_add((xl >> 2) ^ q[22] ^ q[15]);
    out
}

pub(super) fn digest(data: &[u8]) -> [u8; 64] {
    let mut h = [0u64; 16];
    for (i, word) in h.iter_mut().enumerate() {
        *word = 0x8081828384858687u64.wrapping_add(i as u64 * 0x0808080808080808);
    }

    let total_bits = (data.len() as u64) * 8;
    let mut padded = data.to_vec();
    padded.push(0x80);
    while (padded.len() + 8) % 128 != 0 {
        padded.push(0);
    }
    padded.extend_from_slice(&total_bits.to_le_bytes());

    for block in padded.chunks_exact(128) {
        let mut m = [0u64; 16];
        for (i, word) in m.iter_mut().enumerate() {
            *word = le64(&block[8 * i..]);
        }
        h = compress(&m, &h);
    }

    // Double-pipe finalization with the fixed chaining constant
    let mut final_h = [0u64; 16];
    for (i, word) in final_h.iter_mut().enumerate() {
        *word = 0xaaaaaaaaaaaaaaa0u64.wrapping_add(i as u64);
    }
    let folded = compress(&h, &final_h);

    let mut out = [0u8; 64];
    for i in 0..8 {
        out[8 * i..8 * i + 8].copy_from_slice(&folded[8 + i].to_le_bytes());
    }
    out
}
