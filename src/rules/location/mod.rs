pub(crate) mod helpers;
pub(crate) mod predicates;
pub(crate) mod rules;
