mod array;
mod list;
mod map;
mod partition;
mod set;
mod string;

pub use array::NonEmptyArray;
pub use list::NonEmptyList;
pub use map::NonEmptyMap;
pub use partition::Partition;
pub use set::NonEmptySet;
pub use string::NonEmptyString;
