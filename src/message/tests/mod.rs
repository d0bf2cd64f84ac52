//! Unit tests for the message module.
//!
//! Tests are organised by domain concept: the GSM repertoire, encoding and
//! part counting, merge-field scanning, and the segmenter service.

mod encoding_tests;
