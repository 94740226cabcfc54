//! Integration Tests Module
//!
//! End-to-end tests of the generation pipeline against the scripted provider:
//! structured features, free-text and streamed features, and JSON extraction.

// Vision, roadmap and quiz services
mod structured_features_test;

// Doubt resolver and concept explainer
mod free_text_features_test;

// Response normalizer public API
mod normalizer_test;
