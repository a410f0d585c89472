pub mod curve;
pub mod four_isogeny;
pub mod point;
pub mod strategy;
pub mod three_isogeny;
pub mod x_only_arithmetic;
