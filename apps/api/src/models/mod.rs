pub mod document;
pub mod scan;
