macro_rules! cipher_err {
    ($kind:expr, $($args:tt)*) => (
        $crate::cipher_result::CipherError::new($kind, format!($($args)*))
    )
}
