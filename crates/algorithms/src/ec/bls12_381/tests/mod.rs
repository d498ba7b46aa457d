//! BLS12-381 test suite, split by layer
