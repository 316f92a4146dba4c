use codechef_client::utils::config::get_env_or_default;
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("CC_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("CC_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("CC_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("CC_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("CC_TEST_VAR_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("CC_TEST_VAR_INVALID");
    }
}
