//! 領域資料結構

pub mod core_types;
