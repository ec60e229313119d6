pub mod progress;
pub mod recitation;
