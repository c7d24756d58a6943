pub mod fp;
pub mod generator;
pub mod gf;
pub mod poly;
