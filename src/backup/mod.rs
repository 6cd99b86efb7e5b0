pub mod archive;
pub mod checksum;
pub mod models;

pub use archive::BackupArchive;
pub use checksum::checksum;
pub use models::{BackupData, BackupError};
