mod monoid_tests;
mod number_tests;
mod wrapper_tests;
