pub mod inputs;
pub mod patient;
pub mod score;
pub mod tier;
