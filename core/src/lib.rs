pub mod atom;
pub mod basis;
pub mod config;
pub mod integrals;
pub mod molecule;
