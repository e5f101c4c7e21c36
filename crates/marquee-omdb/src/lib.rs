//! marquee-omdb: OMDb search client implementing the marquee search port.

pub mod client;
pub mod error;
pub mod response;

pub use client::OmdbClient;
pub use error::OmdbError;
pub use response::SearchPage;
