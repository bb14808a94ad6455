//! Size budgets checked before any input file is parsed.

use crate::error::Error;

/// Per-file budget: 10 MiB.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Aggregate budget across a batch: 100 MiB.
pub const DEFAULT_MAX_TOTAL_BYTES: u64 = 100 * 1024 * 1024;

/// Size budgets for a load batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_file_bytes: u64,
    pub max_total_bytes: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            max_total_bytes: DEFAULT_MAX_TOTAL_BYTES,
        }
    }
}

impl Limits {
    /// Validates a whole batch of `(name, byte_length)` pairs.
    ///
    /// Rejects the batch if any single file exceeds the per-file budget, or
    /// if the lengths of the remaining files sum past the aggregate budget.
    /// Nothing is parsed when this fails.
    pub fn check_batch<'a, I>(&self, files: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        let mut oversized = Vec::new();
        let mut total_bytes = 0u64;

        for (name, len) in files {
            if len > self.max_file_bytes {
                oversized.push(name.to_string());
            } else {
                total_bytes += len;
            }
        }

        if !oversized.is_empty() || total_bytes > self.max_total_bytes {
            return Err(Error::SizeLimit {
                oversized,
                total_bytes,
            });
        }

        Ok(())
    }
}
