mod comparison;
mod line_sequence;

pub use self::comparison::ComparisonResult;
pub use self::line_sequence::{FileRole, LineSequence};
