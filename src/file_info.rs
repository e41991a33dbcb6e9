use chrono::{DateTime, Utc};
use std::{fmt, sync::Arc};

use crate::{
    error::{Error, Result},
    utils, FileAttributes, FtpConnection, LocalTime, RemoteMetadata,
};

macro_rules! impl_fn_time {
    ($get_name:ident, $utc_name:ident, $set_name:ident, $field:ident, $doc_name:expr) => {
        #[doc = "Returns the "]
        #[doc = $doc_name]
        #[doc = " as reported by the server, or `None` if not fetched yet"]
        #[must_use]
        pub fn $get_name(&self) -> Option<LocalTime> {
            self.$field
        }

        #[doc = "Returns the "]
        #[doc = $doc_name]
        #[doc = " converted to UTC"]
        #[must_use]
        pub fn $utc_name(&self) -> Option<DateTime<Utc>> {
            self.$field.map(|time| time.with_timezone(&Utc))
        }

        pub(crate) fn $set_name(&mut self, time: Option<LocalTime>) {
            self.$field = time;
        }
    };
}

macro_rules! impl_fn_attr {
    ($get_name:ident, $doc_name:expr, $flag:ident) => {
        #[doc = "Returns `true` if the entry is "]
        #[doc = $doc_name]
        #[must_use]
        pub fn $get_name(&self) -> bool {
            self.attributes.contains(FileAttributes::$flag)
        }
    };
}

/// Cached metadata of one file or directory on a remote FTP server.
///
/// A descriptor is built as soon as a path is known, usually while listing a
/// directory. Timestamps and attributes start absent and are filled in later
/// by [`populate`](Self::populate) once the metadata fetch for that path
/// completes. Identity fields never change after construction.
///
/// The connection is shared with the caller and is never closed here.
pub struct FtpFileInfo<C: FtpConnection> {
    original_path: String,
    full_path: String,
    name: String,
    connection: Arc<C>,
    last_access_time: Option<LocalTime>,
    last_write_time: Option<LocalTime>,
    creation_time: Option<LocalTime>,
    attributes: FileAttributes,
}

impl<C: FtpConnection> FtpFileInfo<C> {
    /// Creates a descriptor for `path`. No request is sent.
    pub fn new<T: Into<String>>(connection: Arc<C>, path: T) -> Self {
        let path = path.into();
        Self::from_parts(connection, path.clone(), path)
    }

    pub(crate) fn from_parts(connection: Arc<C>, original_path: String, full_path: String) -> Self {
        let name = utils::file_name(&full_path).to_owned();

        Self {
            original_path,
            full_path,
            name,
            connection,
            last_access_time: None,
            last_write_time: None,
            creation_time: None,
            attributes: FileAttributes::empty(),
        }
    }

    /// Like [`new`](Self::new), but for a path that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `path` is `None`.
    pub fn try_new<T: Into<String>>(connection: Arc<C>, path: Option<T>) -> Result<Self> {
        match path {
            Some(path) => Ok(Self::new(connection, path)),
            None => Err(Error::InvalidArgument("path")),
        }
    }

    /// Path exactly as given at construction
    #[must_use]
    pub fn original_path(&self) -> &str {
        &self.original_path
    }

    /// Path used for every request to the server
    #[must_use]
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// Final segment of the path
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn connection(&self) -> &Arc<C> {
        &self.connection
    }

    impl_fn_time!(
        last_access_time,
        last_access_time_utc,
        set_last_access_time,
        last_access_time,
        "last access time"
    );
    impl_fn_time!(
        last_write_time,
        last_write_time_utc,
        set_last_write_time,
        last_write_time,
        "last write time"
    );
    impl_fn_time!(
        creation_time,
        creation_time_utc,
        set_creation_time,
        creation_time,
        "creation time"
    );

    #[must_use]
    pub fn attributes(&self) -> FileAttributes {
        self.attributes
    }

    pub(crate) fn set_attributes(&mut self, attributes: FileAttributes) {
        self.attributes = attributes;
    }

    impl_fn_attr!(is_directory, "a directory", DIRECTORY);
    impl_fn_attr!(is_read_only, "read-only", READ_ONLY);
    impl_fn_attr!(is_hidden, "hidden", HIDDEN);
    impl_fn_attr!(is_reparse_point, "a symlink or other reparse point", REPARSE_POINT);

    /// Stores the result of a metadata fetch.
    ///
    /// Every field is replaced, so a value the fetch did not report becomes
    /// absent again.
    pub fn populate(&mut self, metadata: RemoteMetadata) {
        trace!("populate {}: {:?}", self.full_path, metadata);

        self.set_last_access_time(metadata.last_access_time);
        self.set_last_write_time(metadata.last_write_time);
        self.set_creation_time(metadata.creation_time);
        self.set_attributes(metadata.attributes);
    }

    /// Builder form of [`populate`](Self::populate)
    #[must_use]
    pub fn with_metadata(mut self, metadata: RemoteMetadata) -> Self {
        self.populate(metadata);
        self
    }

    /// Asks the server whether the file exists. Not cached.
    ///
    /// # Errors
    ///
    /// Any error of the connection, unchanged.
    pub async fn exists(&self) -> std::result::Result<bool, C::Error> {
        debug!("exists {}", self.full_path);
        self.connection.file_exists(&self.full_path).await
    }

    /// Deletes the entry on the server.
    ///
    /// The request goes through [`FtpConnection::delete_directory`] even when
    /// the entry is a file. The descriptor is left as it was; call
    /// [`exists`](Self::exists) to observe the result.
    ///
    /// # Errors
    ///
    /// Any error of the connection, unchanged.
    pub async fn delete(&self) -> std::result::Result<(), C::Error> {
        if !self.is_directory() {
            warn!("delete {} is sent as a directory removal", self.full_path);
        }

        debug!("delete {}", self.full_path);
        self.connection.delete_directory(&self.full_path).await
    }
}

impl<C: FtpConnection> Clone for FtpFileInfo<C> {
    fn clone(&self) -> Self {
        Self {
            original_path: self.original_path.clone(),
            full_path: self.full_path.clone(),
            name: self.name.clone(),
            connection: self.connection.clone(),
            last_access_time: self.last_access_time,
            last_write_time: self.last_write_time,
            creation_time: self.creation_time,
            attributes: self.attributes,
        }
    }
}

impl<C: FtpConnection> fmt::Debug for FtpFileInfo<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FtpFileInfo")
            .field("full_path", &self.full_path)
            .field("name", &self.name)
            .field("last_access_time", &self.last_access_time)
            .field("last_write_time", &self.last_write_time)
            .field("creation_time", &self.creation_time)
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}
