// Lexical matching: tokenization and weighted overlap scoring of stored
// jobs against the profile. All matching is token-set based — no ranking
// model, no embeddings.

pub mod handlers;
pub mod scorer;
pub mod tokenize;
