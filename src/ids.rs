//! Opaque object identifiers for the project file.
//!
//! Every object in `project.pbxproj` is keyed by a 24-digit uppercase hex
//! string (96 bits). The identifiers carry no meaning; they only let entries
//! point at each other. The one hard rule is that no identifier repeats
//! within a single generated document.
//!
//! ## Strategies
//!
//! - **Random** (default): the leading 24 hex digits of a v4 UUID. Every run
//!   produces fresh identifiers, which is what Xcode itself does.
//! - **Seeded**: `SHA-256(seed, counter)` truncated to 24 hex digits. The
//!   same seed and the same source tree produce a byte-identical project
//!   file, so regenerating does not churn version-control diffs.
//!
//! [`IdPool`] remembers everything it has issued and redraws on collision in
//! either mode, so uniqueness never depends on the odds.

use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Number of hex digits in an object identifier.
pub const ID_LEN: usize = 24;

/// A 24-digit uppercase hex object identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Build an identifier from the leading digits of a lowercase hex digest.
    fn from_hex_digest(hex: &str) -> Self {
        ObjectId(hex[..ID_LEN].to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How new identifiers are drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdStrategy {
    Random,
    Seeded(String),
}

/// Run-scoped identifier allocator.
#[derive(Debug)]
pub struct IdPool {
    strategy: IdStrategy,
    counter: u64,
    issued: HashSet<ObjectId>,
}

impl IdPool {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            counter: 0,
            issued: HashSet::new(),
        }
    }

    pub fn random() -> Self {
        Self::new(IdStrategy::Random)
    }

    pub fn seeded(seed: impl Into<String>) -> Self {
        Self::new(IdStrategy::Seeded(seed.into()))
    }

    /// Seeded when a non-empty seed is given, random otherwise.
    pub fn from_seed(seed: Option<&str>) -> Self {
        match seed {
            Some(s) if !s.is_empty() => Self::seeded(s),
            _ => Self::random(),
        }
    }

    /// Allocate an identifier that this pool has never handed out before.
    pub fn allocate(&mut self) -> ObjectId {
        loop {
            let candidate = self.draw();
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    fn draw(&mut self) -> ObjectId {
        let counter = self.counter;
        self.counter += 1;
        match &self.strategy {
            IdStrategy::Random => {
                ObjectId::from_hex_digest(&Uuid::new_v4().simple().to_string())
            }
            IdStrategy::Seeded(seed) => {
                let mut hasher = Sha256::new();
                hasher.update(b"pbxgen-id\0");
                hasher.update(seed.as_bytes());
                hasher.update(b"\0");
                hasher.update(counter.to_le_bytes());
                ObjectId::from_hex_digest(&format!("{:x}", hasher.finalize()))
            }
        }
    }

    /// Number of identifiers issued so far.
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}
