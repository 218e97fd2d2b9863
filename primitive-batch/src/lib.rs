#![allow(clippy::identity_op, clippy::too_many_arguments)]

pub mod assets;
pub mod renderer;
pub mod shapes;
pub mod utils;

pub use anyhow;
pub use glam;
pub use log;

#[macro_export]
macro_rules! error_return {
    ($($arg:tt)+) => { { $crate::log::error!($($arg)+); return; } };
}

#[macro_export]
macro_rules! error_continue {
    ($($arg:tt)+) => { { $crate::log::error!($($arg)+); continue; } };
}
