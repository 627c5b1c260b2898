mod fraction;
mod range;

pub use fraction::Fraction;
pub use range::{
    InvalidRangeError,
    Range,
    RangeValue,
};
