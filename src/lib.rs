// We favour using terms like E for an elliptic curve, or A for its
// Montgomery coefficient, as it is standard in the literature.
#![allow(non_snake_case)]

pub mod elliptic;
pub mod errors;
pub mod fields;
pub mod protocols;
pub mod utilities;
