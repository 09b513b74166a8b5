pub mod dogs_handler;
pub mod problem;
pub mod rate_limit;
