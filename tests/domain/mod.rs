mod formatting_test;
