//! Writers for the generated review documents.

pub mod slides;
pub mod spreadsheet;
