use serde::{Deserialize, Serialize};

/// Attribute flags of a remote entry
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileAttributes(u32);

/// File type bits of a unix mode, as reported by FTP listings
struct FileType(u32);

bitflags! {
    impl FileAttributes: u32 {
        const READ_ONLY = 0x0000_0001;
        const HIDDEN = 0x0000_0002;
        const SYSTEM = 0x0000_0004;
        const DIRECTORY = 0x0000_0010;
        const ARCHIVE = 0x0000_0020;
        const DEVICE = 0x0000_0040;
        const NORMAL = 0x0000_0080;
        const TEMPORARY = 0x0000_0100;
        const SPARSE_FILE = 0x0000_0200;
        const REPARSE_POINT = 0x0000_0400;
        const COMPRESSED = 0x0000_0800;
        const OFFLINE = 0x0000_1000;
        const NOT_CONTENT_INDEXED = 0x0000_2000;
        const ENCRYPTED = 0x0000_4000;
    }

    impl FileType: u32 {
        const FIFO = 0x1000;
        const CHR = 0x2000;
        const DIR = 0x4000;
        const BLK = 0x6000;
        const REG = 0x8000;
        const LNK = 0xA000;
    }
}

const TYPE_MASK: u32 = 0xF000;
const OWNER_WRITE: u32 = 0o200;

impl FileAttributes {
    /// Maps a unix mode to attribute flags.
    ///
    /// Directories become [`DIRECTORY`](Self::DIRECTORY), symlinks
    /// [`REPARSE_POINT`](Self::REPARSE_POINT) and device nodes or fifos
    /// [`DEVICE`](Self::DEVICE). A regular file with nothing else to report is
    /// [`NORMAL`](Self::NORMAL). A clear owner write bit adds
    /// [`READ_ONLY`](Self::READ_ONLY).
    #[must_use]
    pub fn from_unix_mode(mode: u32) -> Self {
        let mut attrs = match mode & TYPE_MASK {
            t if t == FileType::DIR.bits() => Self::DIRECTORY,
            t if t == FileType::LNK.bits() => Self::REPARSE_POINT,
            t if t == FileType::CHR.bits()
                || t == FileType::BLK.bits()
                || t == FileType::FIFO.bits() =>
            {
                Self::DEVICE
            }
            _ => Self::empty(),
        };

        if mode & OWNER_WRITE == 0 {
            attrs |= Self::READ_ONLY;
        }

        if attrs.is_empty() && mode & TYPE_MASK == FileType::REG.bits() {
            attrs = Self::NORMAL;
        }

        attrs
    }
}

#[cfg(test)]
mod test_file_attributes {
    use super::FileAttributes;

    #[test]
    fn test_default_is_empty() {
        assert!(FileAttributes::default().is_empty());
        assert_eq!(FileAttributes::default().bits(), 0);
    }

    #[test]
    fn test_from_unix_mode_directory() {
        let attrs = FileAttributes::from_unix_mode(0o040_755);
        assert_eq!(attrs, FileAttributes::DIRECTORY);
    }

    #[test]
    fn test_from_unix_mode_regular() {
        assert_eq!(
            FileAttributes::from_unix_mode(0o100_644),
            FileAttributes::NORMAL
        );
        assert_eq!(
            FileAttributes::from_unix_mode(0o100_444),
            FileAttributes::READ_ONLY
        );
    }

    #[test]
    fn test_from_unix_mode_special() {
        assert_eq!(
            FileAttributes::from_unix_mode(0o120_777),
            FileAttributes::REPARSE_POINT
        );
        assert_eq!(
            FileAttributes::from_unix_mode(0o020_666),
            FileAttributes::DEVICE
        );
        assert_eq!(
            FileAttributes::from_unix_mode(0o060_440),
            FileAttributes::DEVICE | FileAttributes::READ_ONLY
        );
        assert_eq!(
            FileAttributes::from_unix_mode(0o010_600),
            FileAttributes::DEVICE
        );
    }

    #[test]
    fn test_from_unix_mode_without_type_bits() {
        assert!(FileAttributes::from_unix_mode(0o644).is_empty());
        assert_eq!(
            FileAttributes::from_unix_mode(0o555),
            FileAttributes::READ_ONLY
        );
    }

    #[test]
    fn test_truncates_unknown_bits() {
        let attrs = FileAttributes::from_bits_truncate(0x8000_0011);
        assert_eq!(attrs, FileAttributes::READ_ONLY | FileAttributes::DIRECTORY);
    }
}
