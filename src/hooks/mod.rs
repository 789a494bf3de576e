pub mod use_is_mounted;

pub use use_is_mounted::use_is_mounted;
