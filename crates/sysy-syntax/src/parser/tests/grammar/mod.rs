mod declarations_tests;
mod expressions_tests;
mod functions_tests;
mod statements_tests;
mod trivia_tests;
