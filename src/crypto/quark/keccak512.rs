//! Keccak-512 as originally submitted (0x01 domain padding, rate 72)
//!
//! Not SHA-3: FIPS 202 changed the domain padding to 0x06, which chains
//! built before standardization never picked up.

const RATE: usize = 72;
const ROUNDS: usize = 24;

/// LFSR-generated iota constants
fn round_constants() -> [u64; ROUNDS] {
    let mut rc = [0u64; ROUNDS];
    let mut r: u32 = 1;
    for constant in rc.iter_mut() {
        for j in 0..7 {
            r = ((r << 1) ^ ((r >> 7) * 0x71)) & 0xff;
            if r & 2 != 0 {
                *constant ^= 1 << ((1u32 << j) - 1);
            }
        }
    }
    rc
}

/// Rho rotation offsets laid out by the pi walk
fn rotation_offsets() -> [[u32; 5]; 5] {
    let mut rot = [[0u32; 5]; 5];
    let (mut x, mut y) = (1usize, 0usize);
    for t in 0..24u32 {
        rot[x][y] = ((t + 1) * (t + 2) / 2) % 64;
        let next = (2 * x + 3 * y) % 5;
        x = y;
        y = next;
    }
    rot
}

fn keccak_f(state: &mut [[u64; 5]; 5], rc: &[u64; ROUNDS], rot: &[[u32; 5]; 5]) {
    for round in 0..ROUNDS {
        // theta
        let mut c = [0u64; 5];
        for x in 0..5 {
            c[x] = state[x][0] ^ state[x][1] ^ state[x][2] ^ state[x][3] ^ state[x][4];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                state[x][y] ^= d;
            }
        }
        // rho and pi
        let mut b = [[0u64; 5]; 5];
        for x in 0..5 {
            for y in 0..5 {
                b[y][(2 * x + 3 * y) % 5] = state[x][y].rotate_left(rot[x][y]);
            }
        }
        // chi
        for x in 0..5 {
            for y in 0..5 {
                state[x][y] = b[x][y] ^ (!b[(x + 1) % 5][y] & b[(x + 2) % 5][y]);
            }
        }
        // iota
        state[0][0] ^= rc[round];
    }
}

fn le64(bytes: &[u8]) -> u64 {
    let mut w = [0u8; 8];
    w.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(w)
}

pub(super) fn digest(data: &[u8]) -> [u8; 64] {
    let rc = round_constants();
    let rot = rotation_offsets();
    let mut state = [[0u64; 5]; 5];

    let mut padded = data.to_vec();
    padded.push(0x01);
    while padded.len() % RATE != 0 {
        padded.push(0);
    }
    if let Some(last) = padded.last_mut() {
        *last |= 0x80;
    }

    for block in padded.chunks_exact(RATE) {
        for i in 0..RATE / 8 {
            state[i % 5][i / 5] ^= le64(&block[8 * i..]);
        }
        keccak_f(&mut state, &rc, &rot);
    }

    // 64-byte output fits within one squeeze of the 72-byte rate
    let mut out = [0u8; 64];
    for i in 0..8 {
        out[8 * i..8 * i + 8].copy_from_slice(&state[i % 5][i / 5].to_le_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_vector() {
        assert_eq!(
            hex::encode(digest(b"")),
            concat!(
                "0eab42de4c3ceb9235fc91acffe746b29c29a8c366b7c60e4e67c466f36a",
                "4304c00fa9caf9d87976ba469bcbe06713b435f091ef2769fb160cdab33d",
                "3670680e",
            )
        );
    }

    #[test]
    fn test_first_round_constant() {
        assert_eq!(round_constants()[0], 1);
    }

    #[test]
    fn test_rate_boundary() {
        assert_ne!(digest(&[2u8; 71]), digest(&[2u8; 72]));
    }
}
