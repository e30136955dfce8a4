pub(crate) mod location;
