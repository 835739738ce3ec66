pub mod device_type;
pub mod rest;
pub mod stone;
