//! I/O module tests.

mod decode_tests;
