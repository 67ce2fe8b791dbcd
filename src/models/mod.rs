// Module exports for models

pub mod anniversary;
pub mod settings;
pub mod tribute;
