// http://cr.yp.to/chacha/chacha-20080128.pdf
// https://tools.ietf.org/html/rfc7539

use log::debug;

use crate::cipher_result::CipherErrorKind::ValidationError;
use crate::cipher_result::CipherResult;

pub const KEY_LEN: usize = 32;
pub const NONCE_LEN: usize = 12;
pub const BLOCK_LEN: usize = 64;

// "expand 32-byte k"
const INITIAL_STATE: [u32; 4] = [0x61707865, 0x3320646e, 0x79622d32, 0x6b206574];

// convert $e[$i..$i + 4] into u32, least-significant byte first
macro_rules! to_le_u32 {
    ($e:ident[$i:expr]) => ({
        let i: usize = $i;
        let v1 = $e[i] as u32;
        let v2 = $e[i + 1] as u32;
        let v3 = $e[i + 2] as u32;
        let v4 = $e[i + 3] as u32;
        v1 | (v2 << 8) | (v3 << 16) | (v4 << 24)
    })
}

pub struct ChaCha20 {
    // vals[4..12] hold the key. SECRET
    // vals[12] is the block counter; it is the only word that mutates.
    vals: [u32; 16],
    // keystream of the most recently generated block. SECRET
    block: [u8; BLOCK_LEN],
    // next unconsumed byte of `block`.
    // 0 or BLOCK_LEN means "regenerate before consuming".
    cursor: usize,
}

impl ChaCha20 {
    // key: SECRET
    pub fn new(key: &[u8], nonce: &[u8]) -> CipherResult<ChaCha20> {
        ChaCha20::with_counter(key, nonce, 0)
    }

    // key: SECRET
    pub fn with_counter(key: &[u8], nonce: &[u8], counter: u32) -> CipherResult<ChaCha20> {
        if key.len() != KEY_LEN {
            return cipher_err!(ValidationError,
                               "key must be {} bytes, got {}", KEY_LEN, key.len());
        }
        if nonce.len() != NONCE_LEN {
            return cipher_err!(ValidationError,
                               "nonce must be {} bytes, got {}", NONCE_LEN, nonce.len());
        }

        let mut vals = [0u32; 16];

        vals[..4].copy_from_slice(&INITIAL_STATE);

        for i in 0..8 {
            vals[4 + i] = to_le_u32!(key[4 * i]);
        }

        vals[12] = counter;

        for i in 0..3 {
            vals[13 + i] = to_le_u32!(nonce[4 * i]);
        }

        debug!("new chacha20 engine, initial counter {}", counter);

        Ok(ChaCha20 {
            vals: vals,
            block: [0u8; BLOCK_LEN],
            cursor: 0,
        })
    }

    fn round20(&self) -> [u32; 16] {
        // $e must be > 0 and < 32
        macro_rules! rot {
            ($a:expr, $e:expr) => ({
                let a: u32 = $a;
                let e: u32 = $e;
                (a << e) | (a >> (32 - e))
            })
        }

        macro_rules! quarter_round {
            ($a:expr, $b:expr, $c:expr, $d:expr) => ({
                $a = $a.wrapping_add($b);
                $d ^= $a;
                $d = rot!($d, 16);

                $c = $c.wrapping_add($d);
                $b ^= $c;
                $b = rot!($b, 12);

                $a = $a.wrapping_add($b);
                $d ^= $a;
                $d = rot!($d, 8);

                $c = $c.wrapping_add($d);
                $b ^= $c;
                $b = rot!($b, 7);
            })
        }

        macro_rules! quarter_round_idx {
            ($e:expr, $a:expr, $b:expr, $c:expr, $d:expr) => (
                quarter_round!($e[$a], $e[$b], $e[$c], $e[$d])
            )
        }

        let mut vals = self.vals;
        for _ in 0..10 {
            // column round
            quarter_round_idx!(vals, 0, 4, 8, 12);
            quarter_round_idx!(vals, 1, 5, 9, 13);
            quarter_round_idx!(vals, 2, 6, 10, 14);
            quarter_round_idx!(vals, 3, 7, 11, 15);

            // diagonal round
            quarter_round_idx!(vals, 0, 5, 10, 15);
            quarter_round_idx!(vals, 1, 6, 11, 12);
            quarter_round_idx!(vals, 2, 7, 8, 13);
            quarter_round_idx!(vals, 3, 4, 9, 14);
        }

        for i in 0..16 {
            vals[i] = vals[i].wrapping_add(self.vals[i]);
        }

        vals
    }

    // overwrites `block` with the next 64 keystream bytes and advances the
    // counter. the counter wraps after 2^32 blocks (~256GiB of keystream),
    // at which point the keystream repeats; callers needing more than that
    // under one (key, nonce) must rekey.
    fn next_block(&mut self) {
        let next = self.round20();

        self.vals[12] = self.vals[12].wrapping_add(1);

        for i in 0..16 {
            self.block[4 * i] = next[i] as u8;
            self.block[4 * i + 1] = (next[i] >> 8) as u8;
            self.block[4 * i + 2] = (next[i] >> 16) as u8;
            self.block[4 * i + 3] = (next[i] >> 24) as u8;
        }
    }

    // Do not use the same (key, nonce) for more than one keystream.
    //
    // the keystream position persists across calls: a partial block left
    // over from one call is consumed first by the next one.
    //
    // data: SECRET
    pub fn encrypt(&mut self, data: &[u8]) -> CipherResult<Vec<u8>> {
        if data.is_empty() {
            return cipher_err!(ValidationError, "input must not be empty");
        }

        let mut ret = Vec::with_capacity(data.len());

        for &b in data {
            if self.cursor == 0 || self.cursor == BLOCK_LEN {
                self.next_block();
                self.cursor = 0;
            }
            ret.push(b ^ self.block[self.cursor]);
            self.cursor += 1;
        }

        Ok(ret)
    }

    // XOR is self-inverse, so decryption is the same operation as
    // encryption. separate names exist only for the caller's benefit.
    pub fn decrypt(&mut self, data: &[u8]) -> CipherResult<Vec<u8>> {
        self.encrypt(data)
    }
}
