use std::sync::Arc;

/// Capabilities a descriptor needs from the FTP connection that discovered it.
///
/// The connection owns the control and data channels, authentication and any
/// timeouts. Errors are returned in the connection's own type and reach the
/// caller of [`FtpFileInfo`](crate::FtpFileInfo) untouched.
#[async_trait]
pub trait FtpConnection: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Checks whether a file exists at `path` on the server
    async fn file_exists(&self, path: &str) -> Result<bool, Self::Error>;

    /// Removes the directory at `path` on the server
    async fn delete_directory(&self, path: &str) -> Result<(), Self::Error>;
}

#[async_trait]
impl<T: FtpConnection + ?Sized> FtpConnection for Arc<T> {
    type Error = T::Error;

    async fn file_exists(&self, path: &str) -> Result<bool, Self::Error> {
        (**self).file_exists(path).await
    }

    async fn delete_directory(&self, path: &str) -> Result<(), Self::Error> {
        (**self).delete_directory(path).await
    }
}


#[cfg(test)]
mod test_shared_connection {
    use std::sync::Arc;

    use super::{
        stub::{Call, StubConnection},
        FtpConnection,
    };

    #[tokio::test]
    async fn test_arc_forwards_to_inner() {
        let inner = Arc::new(StubConnection::answering(true));
        let shared = Arc::new(inner.clone());

        assert!(shared.file_exists("/a").await.unwrap());
        shared.delete_directory("/b").await.unwrap();

        assert_eq!(
            inner.calls(),
            vec![
                Call::FileExists("/a".to_owned()),
                Call::DeleteDirectory("/b".to_owned())
            ]
        );
    }
}
