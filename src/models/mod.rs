mod feature;
mod value;

pub use feature::{Feature, RawRow};
pub use value::StoredValue;
