mod image_extractor_tests;
mod integration_tests;
