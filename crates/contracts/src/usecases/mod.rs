pub mod common;
pub mod u501_replenishment;
