


// Expression node tests
mod expression;

// Operator catalog tests
mod catalog;
