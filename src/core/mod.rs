//! Core library components.
//!
//! Decryption, parsing, schema mapping, environment export and masked
//! presentation. Nothing here prints directly; reports go to a caller-given
//! writer.

pub mod classify;
pub mod config;
pub mod constants;
pub mod decrypt;
pub mod document;
pub mod environ;
pub mod loader;
pub mod mapper;
pub mod mask;
pub mod present;
pub mod schema;
pub mod validation;

pub use decrypt::{Decryptor, ExternalCommand, Plaintext};
pub use document::{Format, RawEntry};
pub use environ::{Environment, MemoryEnvironment, ProcessEnvironment};
pub use loader::Loader;
pub use present::Visibility;
pub use schema::ConfigRecord;
