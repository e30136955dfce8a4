#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr
        $(, requires: $requires:expr)?
        , when: |$guard_probe:ident| $guard_body:expr
        , prod: |$prod_probe:ident| $prod_body:block
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            requires: { $crate::engine::SignalMask::empty() $(| $requires)? },
            guard: Box::new(move |$guard_probe: &$crate::engine::Probe| -> bool { $guard_body }),
            production: Box::new(move |$prod_probe: &$crate::engine::Probe| -> $crate::StructuredLocation {
                $prod_body
            }),
        }
    }};
}
