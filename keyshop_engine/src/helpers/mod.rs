mod key_spec;

pub use key_spec::{parse_key_spec, KeySpecError};
