//! Groestl-512 (wide-pipe, two 1024-bit AES-like permutations, 14 rounds)

use std::sync::OnceLock;

const ROUNDS: usize = 14;
const COLS: usize = 16;

/// Circulant MixBytes row
const MDS: [u8; 8] = [2, 2, 3, 4, 5, 3, 5, 7];
const SHIFT_P: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 11];
const SHIFT_Q: [usize; 8] = [1, 3, 5, 11, 0, 2, 4, 6];

struct Tables {
    sbox: [u8; 256],
    /// gmul[k][b] = b * MDS[k] in GF(2^8)
    gmul: [[u8; 256]; 8],
}

fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut r = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            r ^= a;
        }
        b >>= 1;
        let carry = a & 0x80 != 0;
        a <<= 1;
        if carry {
            a ^= 0x1b;
        }
    }
    r
}

/// The AES S-box, generated from its defining field inversion plus
/// affine map rather than carried as a 256-entry literal
fn build_tables() -> Tables {
    let mut sbox = [0u8; 256];
    sbox[0] = 0x63;
    let (mut p, mut q) = (1u8, 1u8);
    loop {
        // p walks multiplicatively by 3, q by its inverse
        p = p ^ (p << 1) ^ if p & 0x80 != 0 { 0x1b } else { 0 };
        q ^= q << 1;
        q ^= q << 2;
        q ^= q << 4;
        if q & 0x80 != 0 {
            q ^= 0x09;
        }
        let x = q ^ q.rotate_left(1) ^ q.rotate_left(2) ^ q.rotate_left(3) ^ q.rotate_left(4);
        sbox[p as usize] = x ^ 0x63;
        if p == 1 {
            break;
        }
    }

    let mut gmul = [[0u8; 256]; 8];
    for (k, row) in gmul.iter_mut().enumerate() {
        for (b, entry) in row.iter_mut().enumerate() {
            *entry = gf_mul(b as u8, MDS[k]);
        }
    }
    Tables { sbox, gmul }
}

fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(build_tables)
}

type State = [[u8; COLS]; 8];

fn permute(state: &mut State, is_q: bool) {
    let t = tables();
    for r in 0..ROUNDS as u8 {
        // AddRoundConstant
        if is_q {
            for row in state.iter_mut() {
                for byte in row.iter_mut() {
                    *byte ^= 0xff;
                }
            }
            for (j, byte) in state[7].iter_mut().enumerate() {
                *byte ^= ((j as u8) << 4) ^ r;
            }
        } else {
            for (j, byte) in state[0].iter_mut().enumerate() {
                *byte ^= ((j as u8) << 4) ^ r;
            }
        }
        // SubBytes
        for row in state.iter_mut() {
            for byte in row.iter_mut() {
                *byte = t.sbox[*byte as usize];
            }
        }
        // ShiftBytes
        let shifts = if is_q { &SHIFT_Q } else { &SHIFT_P };
        let mut shifted = [[0u8; COLS]; 8];
        for i in 0..8 {
            for j in 0..COLS {
                shifted[i][j] = state[i][(j + shifts[i]) % COLS];
            }
        }
        // MixBytes
        for j in 0..COLS {
            for i in 0..8 {
                let mut acc = 0u8;
                for k in 0..8 {
                    acc ^= t.gmul[k][shifted[(i + k) % 8][j] as usize];
                }
                state[i][j] = acc;
            }
        }
    }
}

/// Column-major load: byte k lands at row k % 8, column k / 8
fn to_matrix(block: &[u8]) -> State {
    let mut m = [[0u8; COLS]; 8];
    for (k, &byte) in block.iter().enumerate() {
        m[k % 8][k / 8] = byte;
    }
    m
}

fn xor_into(dst: &mut State, src: &State) {
    for i in 0..8 {
        for j in 0..COLS {
            dst[i][j] ^= src[i][j];
        }
    }
}

pub(super) fn digest(data: &[u8]) -> [u8; 64] {
    // IV: the digest length 512 as a big-endian 1024-bit value
    let mut h: State = [[0u8; COLS]; 8];
    h[6][COLS - 1] = 0x02;

    let mut padded = data.to_vec();
    padded.push(0x80);
    while (padded.len() + 8) % 128 != 0 {
        padded.push(0);
    }
    let nblocks = ((padded.len() + 8) / 128) as u64;
    padded.extend_from_slice(&nblocks.to_be_bytes());

    for block in padded.chunks_exact(128) {
        let m = to_matrix(block);
        let mut hp = h;
        xor_into(&mut hp, &m);
        permute(&mut hp, false);
        let mut mq = m;
        permute(&mut mq, true);
        xor_into(&mut h, &hp);
        xor_into(&mut h, &mq);
    }

    // Output transform: P(h) xor h, truncated to the low half
    let mut fin = h;
    permute(&mut fin, false);
    xor_into(&mut fin, &h);

    let mut out = [0u8; 64];
    for k in 64..128 {
        out[k - 64] = fin[k % 8][k / 8];
    }
    out
}
