pub mod mmv;
pub mod word;
