//! Serializable form of a descriptor.
//!
//! Only the path identity is saved. The name is derived from the path, and
//! timestamps and attributes are fetched again by whoever owns the
//! connection, so none of them need durable storage.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{FtpConnection, FtpFileInfo};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FtpFileInfoRecord {
    pub original_path: String,
    pub full_path: String,
}

impl FtpFileInfoRecord {
    /// Binds the record to a connection again.
    ///
    /// The returned descriptor has no metadata until it is populated.
    pub fn into_info<C: FtpConnection>(self, connection: Arc<C>) -> FtpFileInfo<C> {
        FtpFileInfo::from_parts(connection, self.original_path, self.full_path)
    }
}

impl<C: FtpConnection> From<&FtpFileInfo<C>> for FtpFileInfoRecord {
    fn from(info: &FtpFileInfo<C>) -> Self {
        Self {
            original_path: info.original_path().to_owned(),
            full_path: info.full_path().to_owned(),
        }
    }
}

impl<C: FtpConnection> FtpFileInfo<C> {
    #[must_use]
    pub fn to_record(&self) -> FtpFileInfoRecord {
        FtpFileInfoRecord::from(self)
    }
}

#[cfg(test)]
mod test_record {
    use chrono::{FixedOffset, TimeZone};
    use std::sync::Arc;

    use super::FtpFileInfoRecord;
    use crate::{
        connection::stub::{Call, StubConnection},
        FileAttributes, FtpFileInfo, RemoteMetadata,
    };

    #[test]
    fn test_record_skips_metadata() {
        let connection = Arc::new(StubConnection::default());
        let time = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2022, 6, 1, 12, 0, 0)
            .unwrap();
        let info = FtpFileInfo::new(connection, "/pub/data/report.txt").with_metadata(
            RemoteMetadata::default()
                .with_last_write_time(time)
                .with_attributes(FileAttributes::READ_ONLY),
        );

        let json = serde_json::to_value(info.to_record()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "original_path": "/pub/data/report.txt",
                "full_path": "/pub/data/report.txt",
            })
        );
    }

    #[tokio::test]
    async fn test_into_info_rebinds_connection() {
        let json = r#"{"original_path":"pub/a/b.bin","full_path":"/home/ftp/pub/a/b.bin"}"#;
        let record: FtpFileInfoRecord = serde_json::from_str(json).unwrap();

        let connection = Arc::new(StubConnection::answering(true));
        let info = record.into_info(connection.clone());

        assert_eq!(info.original_path(), "pub/a/b.bin");
        assert_eq!(info.full_path(), "/home/ftp/pub/a/b.bin");
        assert_eq!(info.name(), "b.bin");
        assert_eq!(info.last_write_time(), None);
        assert!(info.attributes().is_empty());

        assert!(info.exists().await.unwrap());
        assert_eq!(
            connection.calls(),
            vec![Call::FileExists("/home/ftp/pub/a/b.bin".to_owned())]
        );
    }
}
