//! Integration tests against a mock backend

pub mod admin_tests;
pub mod login_tests;
pub mod registration_tests;
pub mod restore_tests;
pub mod routing_tests;
