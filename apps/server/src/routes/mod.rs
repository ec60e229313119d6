pub mod catalog;
pub mod listen;
pub mod practice;
pub mod recitation;
pub mod score;
