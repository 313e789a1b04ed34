pub mod rate_limit_cleanup;
