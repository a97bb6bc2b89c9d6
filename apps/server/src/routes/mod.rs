pub mod cards;
pub mod settings;
