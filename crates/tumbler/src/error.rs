// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Errors surfaced by the randomness subsystem.
use thiserror::Error;

/// Errors emitted by the randomness subsystem.
#[derive(Debug, Error)]
pub enum RandError {
    /// A bound mutation would leave `lower > upper`. The offending value is
    /// rejected and the previous bounds stay in place; nothing is clamped.
    #[error("invalid sample range: lower bound {lower} exceeds upper bound {upper}")]
    InvalidRange {
        /// Lower bound the range would have ended up with.
        lower: i32,
        /// Upper bound the range would have ended up with.
        upper: i32,
    },
    /// The platform entropy facility could not service the open-time probe.
    /// Nothing can be seeded safely without it, so this is fatal and is not
    /// retried.
    #[error("system entropy facility unavailable: {0}")]
    EntropyUnavailable(getrandom::Error),
}
