pub mod fp;
pub mod fp2;
pub mod utils64;
