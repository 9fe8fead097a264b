// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Xoroshiro128+: the crate's general-purpose deterministic generator.
use crate::entropy::EntropySource;
use crate::generator::BitGenerator;
use crate::splitmix::{SplitMix64, GOLDEN_GAMMA};

/// General-purpose 128-bit-state PRNG (xoroshiro128+, 55/14/36 variant).
///
/// Long period (2^128 - 1), fast, and deterministic: identical state replays
/// an identical stream on every supported platform. Not cryptographically
/// secure; use it for simulation and sampling, never for security-sensitive
/// material.
///
/// Every constructor discards the first generated word, sidestepping a known
/// weak-initial-state artifact of this algorithm family.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xoroshiro128Plus {
    state: [u64; 2],
}

impl Xoroshiro128Plus {
    /// Constructs the generator from two explicit state words.
    ///
    /// The all-zero state is the one fixed point of the transition and must
    /// never be produced; it is remedied here by substituting the SplitMix64
    /// golden-gamma constant for the first word before the initial discard
    /// draw.
    pub fn from_state(state0: u64, state1: u64) -> Self {
        let mut state = [state0, state1];
        if state == [0, 0] {
            state[0] = GOLDEN_GAMMA;
        }
        let mut gen = Self { state };
        let _ = gen.next_u64();
        gen
    }

    /// Constructs the generator from a single seed, expanded into two
    /// decorrelated state words via [`SplitMix64`].
    pub fn from_seed(seed: u64) -> Self {
        let mut expander = SplitMix64::from_seed(seed);
        let state0 = expander.next_u64();
        let state1 = expander.next_u64();
        Self::from_state(state0, state1)
    }

    /// Constructs the generator from two draws of system entropy.
    pub fn from_entropy(entropy: &EntropySource) -> Self {
        let state0 = entropy.next_u64();
        let state1 = entropy.next_u64();
        tracing::debug!(state0, state1, "seeded Xoroshiro128Plus from system entropy");
        Self::from_state(state0, state1)
    }

    /// Advances the stream by 2^64 draws in constant work.
    ///
    /// Partitions the full period into 2^64 non-overlapping substreams:
    /// clone the generator, jump the clone, and the two will never share a
    /// window shorter than 2^64 draws. Jump polynomial is the published one
    /// for the 55/14/36 parameterisation.
    pub fn jump(&mut self) {
        const JUMP: [u64; 2] = [0xbeac_0467_eba5_facb, 0xd86b_048b_86aa_9922];

        let mut s0 = 0;
        let mut s1 = 0;
        for mask in JUMP {
            for bit in 0..64 {
                if mask & (1_u64 << bit) != 0 {
                    s0 ^= self.state[0];
                    s1 ^= self.state[1];
                }
                let _ = self.next_u64();
            }
        }
        self.state = [s0, s1];
    }
}

impl BitGenerator for Xoroshiro128Plus {
    fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }
}
