mod cli_context_tests;
