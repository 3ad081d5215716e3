//! Harvest tests.
