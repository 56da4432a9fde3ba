#![cfg_attr(not(feature = "std"), no_std)]

pub mod ecosystem;
pub mod top_up;

pub use ecosystem::*;
pub use top_up::*;
