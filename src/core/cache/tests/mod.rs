mod group_role_cache_tests;
