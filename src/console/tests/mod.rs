//! Unit tests for the console module.
