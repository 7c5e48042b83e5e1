//! Request and Response models for the track cache API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CapacityRequest, PlaylistRequest};
pub use responses::{
    CapacityResponse, HealthResponse, LibraryResponse, LoadResponse, PlaylistResponse,
    StatsResponse, TrackResponse,
};
