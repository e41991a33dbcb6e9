//! Metadata descriptor for a single entry on a remote FTP server.
//!
//! [`FtpFileInfo`] caches the identity, attributes and timestamps of one remote
//! path and forwards the existence check and deletion to a shared
//! [`FtpConnection`]. The wire protocol itself lives behind that trait.

#[macro_use]
extern crate log;
#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate async_trait;

mod attributes;
mod connection;
mod error;
mod file_info;
mod metadata;
/// Serialization adapter
pub mod record;
mod utils;

pub use self::{
    attributes::FileAttributes,
    connection::FtpConnection,
    error::{Error, Result},
    file_info::FtpFileInfo,
    metadata::{LocalTime, RemoteMetadata},
    record::FtpFileInfoRecord,
};
