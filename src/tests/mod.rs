mod fetch_tests;
mod utils;
mod zigzag_tests;
