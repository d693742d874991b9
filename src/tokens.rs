// src/tokens.rs
use std::sync::LazyLock;
use tiktoken_rs::CoreBPE;

/// The `cl100k_base` encoding, loaded on first use.
/// If it fails to load, counting returns 0.
static BPE: LazyLock<Option<CoreBPE>> = LazyLock::new(|| {
    tiktoken_rs::cl100k_base()
        .map_err(|e| tracing::error!("failed to load cl100k_base tokenizer: {e}"))
        .ok()
});

pub struct Tokenizer;

impl Tokenizer {
    /// Counts the tokens in `text`. Returns 0 if the tokenizer failed to initialize.
    #[must_use]
    pub fn count(text: &str) -> usize {
        BPE.as_ref()
            .map_or(0, |bpe| bpe.encode_ordinary(text).len())
    }

    #[must_use]
    pub fn is_available() -> bool {
        BPE.is_some()
    }
}
