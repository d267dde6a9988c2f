//! Integration tests for barrace.

mod util;

mod arg_tests;
mod invalid_config_tests;
mod invalid_data_tests;
