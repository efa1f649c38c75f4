//! Measurement module
//!
//! Handles ml/oz conversion, default batch sizes, and bar-practical rounding.

pub mod batch_size;
pub mod converter;
pub mod estimate;
pub mod format;
pub mod simplify;
pub mod units;

pub use batch_size::{BatchSize, InputConstraints};
pub use converter::{convert, round_half_up, round_to, to_ml, to_oz};
pub use estimate::{default_batch_volume, known_serving, DEFAULT_DRINKS, DEFAULT_SERVING_OZ};
pub use format::{format_amount, FormattedAmount};
pub use simplify::{
    format_simplified_amount, simplify_ml, simplify_oz, MeasureUnit, SimplifiedAmount,
};
pub use units::{Quantity, Unit, VolumeMode, ML_PER_FL_OZ, ML_PER_OZ_BAND};
