pub mod business;
pub mod review;
