mod comparison_tests;
mod fetch_join_tests;
mod strategy_contract_tests;
