mod conditions;
mod fragment;
mod where_clause;

pub use conditions::{Conditions, Conjunction};
pub use fragment::{expr, Fragment};
pub use where_clause::WhereClause;

pub(crate) use fragment::append_parts;
