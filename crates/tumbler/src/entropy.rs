// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Cryptographically strong system entropy, used only for seeding.
use crate::error::RandError;

/// Process-wide source of cryptographically strong randomness.
///
/// Wraps the platform facility behind [`getrandom`]. The facility is probed
/// once at [`open`](Self::open) and never explicitly closed; the OS keeps it
/// available for the life of the process. Draws are far too slow for
/// per-sample use, so generators consume this source at seed time only.
///
/// The source is read-only from the caller's perspective and needs no
/// locking: the underlying OS facility is already safe for concurrent
/// access, so every accessor takes `&self`.
#[derive(Debug, Clone, Copy)]
pub struct EntropySource(());

impl EntropySource {
    /// Opens the platform entropy facility, probing it with a single draw.
    ///
    /// # Errors
    /// Returns [`RandError::EntropyUnavailable`] when the facility cannot
    /// service the probe. The subsystem cannot seed anything safely without
    /// it, so the failure is fatal and not retried.
    pub fn open() -> Result<Self, RandError> {
        let mut probe = [0_u8; 8];
        getrandom::getrandom(&mut probe).map_err(RandError::EntropyUnavailable)?;
        tracing::debug!("system entropy facility probed and ready");
        Ok(Self(()))
    }

    /// Fills `dest` with raw entropy bytes.
    ///
    /// # Panics
    /// Panics if the facility fails after the successful [`open`](Self::open)
    /// probe. Such faults are permanent platform failures with no recovery
    /// path.
    #[allow(clippy::unused_self, clippy::panic)]
    pub fn fill_bytes(&self, dest: &mut [u8]) {
        if let Err(err) = getrandom::getrandom(dest) {
            panic!("system entropy facility failed after successful probe: {err}");
        }
    }

    /// Returns `n` fresh entropy bytes.
    pub fn next_bytes(&self, n: usize) -> Vec<u8> {
        let mut bytes = vec![0_u8; n];
        self.fill_bytes(&mut bytes);
        bytes
    }

    /// Draws 32 bits of entropy, reconstructed little-endian.
    pub fn next_u32(&self) -> u32 {
        let mut raw = [0_u8; 4];
        self.fill_bytes(&mut raw);
        u32::from_le_bytes(raw)
    }

    /// Draws 64 bits of entropy, reconstructed little-endian.
    pub fn next_u64(&self) -> u64 {
        let mut raw = [0_u8; 8];
        self.fill_bytes(&mut raw);
        u64::from_le_bytes(raw)
    }
}
