mod html_tests;
mod metadata_tests;
