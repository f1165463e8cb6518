mod outcome;
mod query;
