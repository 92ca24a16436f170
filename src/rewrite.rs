//! Pluggable text rewriting.
//!
//! A [`Rewriter`] asks some external service (typically a generative text
//! model) to rewrite a text towards a target grade level. Legible ships no
//! provider: implement the trait over whatever client you use, and hand it
//! to [`Document::rewrite_with`](crate::document::Document::rewrite_with),
//! which keeps the current text intact when the rewrite fails.
//!
//! # Examples
//!
//! ```
//! use async_trait::async_trait;
//! use legible::error::{LegibleError, Result};
//! use legible::rewrite::{Rewriter, rewrite_prompt};
//!
//! struct EnvKeyRewriter;
//!
//! #[async_trait]
//! impl Rewriter for EnvKeyRewriter {
//!     async fn rewrite(&self, text: &str, target_grade: f64) -> Result<String> {
//!         let _key = std::env::var("API_KEY")
//!             .map_err(|_| LegibleError::missing_credential("API_KEY is not set"))?;
//!         let _prompt = rewrite_prompt(text, target_grade);
//!         // send the prompt to the provider here
//!         Err(LegibleError::rewrite("no provider configured"))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "env-key"
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::error::Result;

/// Trait for services that rewrite text towards a target grade level.
///
/// Implementations receive the full text and return replacement text, or an
/// error ([`LegibleError::Rewrite`](crate::error::LegibleError::Rewrite),
/// [`LegibleError::MissingCredential`](crate::error::LegibleError::MissingCredential))
/// when the service cannot produce one. The core applies no retry, timeout
/// or cancellation policy.
#[async_trait]
pub trait Rewriter: Send + Sync {
    /// Rewrite `text` so that it reads at around `target_grade`.
    async fn rewrite(&self, text: &str, target_grade: f64) -> Result<String>;

    /// Get the name/identifier of this rewriter, for logging.
    fn name(&self) -> &str {
        "unknown"
    }
}

/// Build the instruction sent to a generative rewrite service.
pub fn rewrite_prompt(text: &str, target_grade: f64) -> String {
    format!(
        "Rewrite the following text to be simpler, clearer, and have a readability score \
         of around grade {target_grade}. Original text: \"{text}\""
    )
}
