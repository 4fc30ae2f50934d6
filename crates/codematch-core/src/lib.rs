//! Shared types for the codematch plagiarism-detection core.
//!
//! Provides the source-position primitives ([`region::Region`],
//! [`range::Range`]), the file identity model ([`file::SourceFile`],
//! [`file::FileId`]), and the tokenized/fingerprinted representations
//! produced by the tokenizer and winnow filter ([`token::TokenizedFile`],
//! [`token::Fingerprint`], [`token::AstRegion`]).

pub mod cancellation;
pub mod error;
pub mod file;
pub mod id;
pub mod range;
pub mod region;
pub mod token;

pub use cancellation::Cancellation;
pub use error::DomainError;
pub use file::{FileId, SourceFile};
pub use id::IdGenerator;
pub use range::Range;
pub use region::Region;
pub use token::{AstRegion, Fingerprint, TokenizedFile};
