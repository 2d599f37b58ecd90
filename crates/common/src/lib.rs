pub mod instances;
pub mod io;
pub mod sample;
