use crc32fast::Hasher;

/// Derive a stable id seed from a document key using CRC32
pub fn get_document_seed(key: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(b"page://");
    hasher.update(key.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for the nodes of one document
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u64,
}

impl IdGenerator {
    pub fn new(key: &str) -> Self {
        Self {
            seed: get_document_seed(key),
            count: 0,
        }
    }

    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Generate next sequential id
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Next id for which `taken` is false
    pub fn new_unique_id(&mut self, taken: impl Fn(&str) -> bool) -> String {
        loop {
            let id = self.new_id();
            if !taken(&id) {
                return id;
            }
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}
