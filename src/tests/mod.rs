mod style_tests;
mod width_tests;
