use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub struct CommonError(String);

impl CommonError {
    pub fn bit_length_below_minimum(bits: u64) -> CommonError {
        CommonError(format!("Bit length {bits} is less than two"))
    }
}

impl fmt::Display for CommonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for CommonError {}
