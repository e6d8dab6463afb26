//! Run-profile helpers consumed by property-test suites.

pub mod property_test_profile;
