pub mod help;
pub mod root;
pub mod swatches;
pub mod tones;
