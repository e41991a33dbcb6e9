use async_trait::async_trait;
use chrono::{FixedOffset, TimeZone};
use ftp_fileinfo::{FileAttributes, FtpConnection, FtpFileInfo, RemoteMetadata};
use log::LevelFilter;
use std::{collections::HashMap, sync::Arc, sync::Mutex};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("550 {0}: No such file or directory")]
struct NotFound(String);

/// In-memory stand-in for a real FTP client
struct MemoryConnection {
    entries: Mutex<HashMap<String, u32>>,
}

#[async_trait]
impl FtpConnection for MemoryConnection {
    type Error = NotFound;

    async fn file_exists(&self, path: &str) -> Result<bool, Self::Error> {
        Ok(self.entries.lock().unwrap().contains_key(path))
    }

    async fn delete_directory(&self, path: &str) -> Result<(), Self::Error> {
        match self.entries.lock().unwrap().remove(path) {
            Some(_) => Ok(()),
            None => Err(NotFound(path.to_owned())),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Debug)
        .init();

    let connection = Arc::new(MemoryConnection {
        entries: Mutex::new(HashMap::from([
            ("/pub/readme.txt".to_owned(), 0o100_444),
            ("/pub/incoming".to_owned(), 0o040_755),
        ])),
    });

    let paths: Vec<String> = connection.entries.lock().unwrap().keys().cloned().collect();
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    let modified = offset.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap();

    let mut infos = Vec::new();
    for path in paths {
        let mode = connection.entries.lock().unwrap()[&path];
        let info = FtpFileInfo::new(connection.clone(), path).with_metadata(
            RemoteMetadata::default()
                .with_last_write_time(modified)
                .with_attributes(FileAttributes::from_unix_mode(mode)),
        );
        infos.push(info);
    }

    for info in &infos {
        println!(
            "{:<12} dir={} ro={} modified={:?}",
            info.name(),
            info.is_directory(),
            info.is_read_only(),
            info.last_write_time_utc()
        );
    }

    let readme = infos
        .iter()
        .find(|info| info.name() == "readme.txt")
        .expect("listed above");
    readme.delete().await?;
    println!("{} exists after delete: {}", readme.name(), readme.exists().await?);

    if let Err(err) = readme.delete().await {
        println!("second delete: {err}");
    }

    Ok(())
}
