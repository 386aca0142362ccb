use std::fs::{File, OpenOptions};
use std::marker::PhantomData;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use memmap2::Mmap;

use crate::error::{PlatformError, Result};

/// An open, read-only data file (network weights, tablebases, books).
///
/// Closing happens on drop or through [`FileHandle::close`]. Ownership makes a
/// second close impossible.
#[derive(Debug)]
pub struct FileHandle {
    file: File,
    path: PathBuf,
}

impl FileHandle {
    /// Open an existing file for shared reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut options = OpenOptions::new();
        options.read(true);
        #[cfg(windows)]
        {
            use std::os::windows::fs::OpenOptionsExt;
            use windows_sys::Win32::Storage::FileSystem::FILE_FLAG_RANDOM_ACCESS;
            options.custom_flags(FILE_FLAG_RANDOM_ACCESS);
        }

        let file = options.open(path).map_err(|source| PlatformError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "opened data file");

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Length of the file in bytes.
    pub fn size(&self) -> Result<u64> {
        self.file
            .metadata()
            .map(|m| m.len())
            .map_err(PlatformError::Metadata)
    }

    /// Map the whole file read-only.
    ///
    /// Lookups into mapped tables jump around, so where supported the OS is
    /// told not to bother with readahead.
    pub fn map(&self) -> Result<FileMapping<'_>> {
        if self.size()? == 0 {
            return Err(PlatformError::EmptyFile);
        }

        // SAFETY: the view is read-only. Data files are not rewritten while the
        // engine runs; a concurrent truncation would be an external contract
        // violation.
        let map = unsafe { Mmap::map(&self.file) }.map_err(PlatformError::Map)?;

        #[cfg(unix)]
        if let Err(e) = map.advise(memmap2::Advice::Random) {
            tracing::debug!(error = %e, "random access advice rejected");
        }

        tracing::debug!(path = %self.path.display(), len = map.len(), "mapped data file");
        Ok(FileMapping {
            map,
            _handle: PhantomData,
        })
    }

    /// Release the OS handle.
    pub fn close(self) {}
}

/// Read-only view of a mapped file. Cannot outlive its [`FileHandle`].
#[derive(Debug)]
pub struct FileMapping<'a> {
    map: Mmap,
    _handle: PhantomData<&'a FileHandle>,
}

impl FileMapping<'_> {
    pub fn as_bytes(&self) -> &[u8] {
        &self.map
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Always false: empty files are refused by [`FileHandle::map`].
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Release the mapping.
    pub fn unmap(self) {}
}

impl Deref for FileMapping<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.map
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod file_tests;
