//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the panel against mock
//! components or the real drivers.  Nothing here touches stdout.

mod panel_tests;
mod substitution_tests;
