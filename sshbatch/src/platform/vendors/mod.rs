//! Built-in vendor platform definitions.

pub mod cisco_ios;
pub mod hp_comware;
pub mod huawei;
pub mod linux;
