mod clock;
mod directories;
mod storage;

pub use clock::SystemClock;
pub use directories::FsDirectoryCreator;
pub use storage::ExternalStorageLayout;
