mod test_config;
mod test_env;
mod test_error;
