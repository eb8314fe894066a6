use std::error::Error;
use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CipherErrorKind {
    // key/nonce of the wrong length, or empty input to encrypt/decrypt.
    // raised before any engine state is touched.
    ValidationError,
}

#[derive(Debug)]
pub struct CipherError {
    pub kind: CipherErrorKind,
    pub desc: String,
}

impl CipherError {
    pub fn new<T>(kind: CipherErrorKind, desc: String) -> CipherResult<T> {
        Err(CipherError {
            kind: kind,
            desc: desc,
        })
    }
}

impl Error for CipherError {}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind = match self.kind {
            CipherErrorKind::ValidationError => "validation error",
        };
        write!(f, "{}: {}", kind, self.desc)
    }
}

pub type CipherResult<T> = Result<T, CipherError>;
