//! Marker types describing what a [`DateTimeOf`] stands for.
//!
//! [`DateTimeOf`]: crate::DateTimeOf

/// Marker type describing an entity creation.
#[derive(Clone, Copy, Debug)]
pub struct Creation;

/// Marker type describing a membership start.
#[derive(Clone, Copy, Debug)]
pub struct Start;

/// Marker type describing a membership expiration.
#[derive(Clone, Copy, Debug)]
pub struct Expiration;

/// Marker type describing an invoice issuing.
#[derive(Clone, Copy, Debug)]
pub struct Issue;
