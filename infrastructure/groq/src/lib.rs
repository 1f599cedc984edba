pub mod client;
pub mod content_rewriter;
pub mod errors;
pub mod retry;
