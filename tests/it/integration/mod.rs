mod runtime_tests;
mod search_tests;
