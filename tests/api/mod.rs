mod aggregator_tests;
mod auth_tests;
mod log_tests;
