// basic crypto primitives

pub mod chacha20;
