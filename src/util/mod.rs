pub mod compare;

pub use compare::keys_equal;
