pub mod assistant;
pub mod bars;
pub mod help;
pub mod library;
pub mod root;
