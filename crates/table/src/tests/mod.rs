mod helpers;
mod load_tests;
