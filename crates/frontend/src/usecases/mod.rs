pub mod u501_replenishment;
