mod cache_refresh_tests;
