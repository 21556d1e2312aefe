mod resolution_tests;
