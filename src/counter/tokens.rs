use tiktoken_rs::CoreBPE;

use crate::error::{Result, SlocCensusError};

/// Counts tokens in a piece of source text.
pub trait TokenCounter: Send + Sync {
    fn count(&self, text: &str) -> usize;
}

/// Counts tokens with the `cl100k_base` byte-pair encoding.
pub struct BpeTokenCounter {
    bpe: CoreBPE,
}

impl BpeTokenCounter {
    /// Load the `cl100k_base` encoding.
    ///
    /// Loading parses the full rank table, so build one counter per run.
    ///
    /// # Errors
    /// Returns an error if the encoding data cannot be loaded.
    pub fn cl100k() -> Result<Self> {
        let bpe = tiktoken_rs::cl100k_base()
            .map_err(|e| SlocCensusError::Tokenizer(e.to_string()))?;
        Ok(Self { bpe })
    }
}

impl TokenCounter for BpeTokenCounter {
    fn count(&self, text: &str) -> usize {
        self.bpe.encode_with_special_tokens(text).len()
    }
}
