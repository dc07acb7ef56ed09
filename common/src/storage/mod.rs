pub mod corpus;
pub mod seed;
pub mod types;
