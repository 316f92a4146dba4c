mod auth_tests;
mod dispatcher_tests;
