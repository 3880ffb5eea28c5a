// Text preparation: turning raw prose into the cleaned word list that
// every signature feature is computed from.

pub mod tokenize;
