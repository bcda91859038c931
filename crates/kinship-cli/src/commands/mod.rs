//! Command implementations.

pub mod members;
pub mod query;
pub mod run;

pub use self::members::execute_members;
pub use self::query::execute_query;
pub use self::run::execute_run;
