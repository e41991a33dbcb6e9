use chrono::{DateTime, FixedOffset};

use crate::FileAttributes;

/// Local instant as reported by the server, with its UTC offset.
pub type LocalTime = DateTime<FixedOffset>;

/// Metadata reported by a remote fetch for one path.
///
/// Handed to [`FtpFileInfo::populate`](crate::FtpFileInfo::populate) once the
/// fetch completes. Fields the server did not report stay `None`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RemoteMetadata {
    pub last_access_time: Option<LocalTime>,
    pub last_write_time: Option<LocalTime>,
    pub creation_time: Option<LocalTime>,
    pub attributes: FileAttributes,
}

impl RemoteMetadata {
    #[must_use]
    pub fn with_last_access_time(mut self, time: LocalTime) -> Self {
        self.last_access_time = Some(time);
        self
    }

    #[must_use]
    pub fn with_last_write_time(mut self, time: LocalTime) -> Self {
        self.last_write_time = Some(time);
        self
    }

    #[must_use]
    pub fn with_creation_time(mut self, time: LocalTime) -> Self {
        self.creation_time = Some(time);
        self
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: FileAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}
