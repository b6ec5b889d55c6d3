// src/macros.rs

/// `String` shorthand: `s!()` for an empty one, `s!(x)` for `String::from(x)`.
/// Used all over the table code, where owned cells are the norm.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}
