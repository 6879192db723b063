pub mod closure;
pub mod memo;
pub mod natural_range;
pub mod packing;
pub mod protocol;
