//! Error types for mesh information operations.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::id::InternalId;
use crate::kind::InfoKind;

/// Result type for mesh information operations.
pub type InfoResult<T> = Result<T, InfoError>;

/// Errors that can occur while registering or growing information channels.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InfoError {
    /// The internal ID space is saturated.
    ///
    /// The channel that triggered this error *was* registered with `id`;
    /// no further registrations should be attempted on this registry.
    #[error("internal ID space exhausted: '{kind}' was registered with the last ID {id}")]
    RegistrationExhausted {
        /// The kind of the channel that received the last ID.
        kind: InfoKind,
        /// The ID assigned to that channel.
        id: InternalId,
    },

    /// Registration was attempted after the ID space was exhausted.
    ///
    /// The channel was dropped without being registered.
    #[error("no internal IDs left to register '{kind}'")]
    IdSpaceSaturated {
        /// The kind of the rejected channel.
        kind: InfoKind,
    },

    /// A channel of this kind is already registered.
    #[error("information channel '{kind}' is already registered")]
    DuplicateKind {
        /// The duplicate channel kind.
        kind: InfoKind,
    },

    /// A channel could not allocate storage for new faces.
    #[error("failed to grow '{kind}' channel by {requested} faces")]
    GrowthFailed {
        /// The kind of the channel that failed to grow.
        kind: InfoKind,
        /// Number of faces requested.
        requested: usize,
        /// The underlying allocation error.
        #[source]
        source: TryReserveError,
    },

    /// A channel's face count disagrees with the registry's face count.
    #[error("'{kind}' channel has {actual} faces but the registry tracks {expected}")]
    FaceCountMismatch {
        /// The kind of the offending channel.
        kind: InfoKind,
        /// Face count tracked by the registry.
        expected: usize,
        /// Face count found on the channel (or requested by the caller).
        actual: usize,
    },

    /// Adding faces would overflow the tracked face count.
    #[error("cannot add {requested} faces to a mesh with {current} faces")]
    FaceCountOverflow {
        /// Face count tracked by the registry.
        current: usize,
        /// Number of faces requested.
        requested: usize,
    },

    /// A beam lattice clip mode token could not be parsed.
    #[error("invalid clip mode '{0}' (expected none, inside or outside)")]
    InvalidClipMode(String),
}
