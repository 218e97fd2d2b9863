pub mod color;
pub mod math;
pub mod settings;
pub mod storage;
