pub mod directory;
pub mod export;
pub mod filter;
pub mod options;
pub mod validation;
