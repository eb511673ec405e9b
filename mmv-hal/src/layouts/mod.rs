mod comparison;
mod lane_layout;
mod module;
mod packed_vec;

pub use comparison::*;
pub use lane_layout::*;
pub use module::*;
pub use packed_vec::*;

pub trait Data: PartialEq + Eq + Sized {}
impl<T: PartialEq + Eq + Sized> Data for T {}

pub trait DataRef: Data + AsRef<[u64]> {}
impl<T: Data + AsRef<[u64]>> DataRef for T {}

pub trait DataMut: DataRef + AsMut<[u64]> {}
impl<T: DataRef + AsMut<[u64]>> DataMut for T {}
