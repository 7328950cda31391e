pub mod assembler;
pub mod document;

pub use assembler::Assembler;
pub use document::SourceDocument;

#[cfg(test)]
pub(crate) mod testutil;
