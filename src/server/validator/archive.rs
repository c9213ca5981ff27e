use std::io::{Read, Seek};

use zip::{result::ZipError, ZipArchive};

use crate::server::error::validation::ValidationError;

/// Size limits applied while decompressing an archive.
#[derive(Debug, Clone, Copy)]
pub struct SizeLimits {
    /// Upper bound for the sum of all decompressed entries read from one archive
    pub max_uncompressed_size: u64,
    /// Upper bound for any single decompressed entry
    pub max_file_size: u64,
}

/// Running total of decompressed bytes read from one archive.
struct SizeBudget {
    used: u64,
    limit: u64,
}

impl SizeBudget {
    fn charge(&mut self, bytes: u64) -> Result<(), ValidationError> {
        self.used = self.used.saturating_add(bytes);
        if self.used > self.limit {
            return Err(ValidationError::MaximumSizeExceeded);
        }

        Ok(())
    }
}

/// Zip reader that enforces per-entry and aggregate decompressed size limits.
///
/// Entries are never trusted for their declared size; reads are cut off one byte past the
/// per-entry limit so that a lying header cannot inflate memory usage.
pub struct ArchiveReader<R> {
    archive: ZipArchive<R>,
    max_file_size: u64,
    budget: SizeBudget,
}

impl<R: Read + Seek> ArchiveReader<R> {
    pub fn open(input: R, limits: SizeLimits) -> Result<Self, ValidationError> {
        Ok(Self {
            archive: ZipArchive::new(input)?,
            max_file_size: limits.max_file_size,
            budget: SizeBudget {
                used: 0,
                limit: limits.max_uncompressed_size,
            },
        })
    }

    /// Names of all entries in the archive, in a stable order.
    pub fn entry_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.archive.file_names().map(str::to_string).collect();
        names.sort();
        names
    }

    /// Reads and decompresses one entry, charging its size against the archive budget.
    pub fn read_entry(&mut self, name: &str) -> Result<Vec<u8>, ValidationError> {
        let entry = match self.archive.by_name(name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => return Err(ValidationError::NotFound(name.to_string())),
            Err(e) => return Err(e.into()),
        };

        if entry.size() > self.max_file_size {
            return Err(ValidationError::MaximumSizeExceeded);
        }

        let mut body = Vec::with_capacity(entry.size() as usize);
        entry.take(self.max_file_size + 1).read_to_end(&mut body)?;

        if body.len() as u64 > self.max_file_size {
            return Err(ValidationError::MaximumSizeExceeded);
        }

        self.budget.charge(body.len() as u64)?;

        Ok(body)
    }
}
