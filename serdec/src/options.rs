// SPDX-License-Identifier: Apache-2.0

/// Default bound on the textual length of numeric scalars.
pub const DEFAULT_MAX_NUMBER_LEN: usize = 64;

/// Per-pass configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Longest numeric scalar (in bytes) the numeric visitors will try to
    /// convert. Longer tokens are rejected with [`crate::Error::TooLong`].
    pub max_number_len: usize,
}

impl Options {
    /// Options with every field at its default.
    pub const fn new() -> Self {
        Self {
            max_number_len: DEFAULT_MAX_NUMBER_LEN,
        }
    }

    /// Sets the numeric token bound.
    pub const fn with_max_number_len(mut self, max_number_len: usize) -> Self {
        self.max_number_len = max_number_len;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}
