pub mod detail;
pub mod promo;
