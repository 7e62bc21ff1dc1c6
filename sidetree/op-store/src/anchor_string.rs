use crate::Error;

/// The reference recorded on the ledger for one batch: the operation count and the CAS
/// address of the batch file, serialized as `"<count>.<address>"`.  Carrying the count in the
/// anchor lets observers reject over-count batches without fetching the batch file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnchorString {
    pub operation_count: usize,
    pub cas_address: String,
}

impl std::fmt::Display for AnchorString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.operation_count, self.cas_address)
    }
}

impl std::str::FromStr for AnchorString {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (count_str, cas_address) = s
            .split_once('.')
            .ok_or_else(|| Error::Malformed("anchor string has no '.' separator".into()))?;
        let operation_count: usize = count_str.parse().map_err(|_| {
            Error::Malformed("anchor string operation count is not a number".into())
        })?;
        if operation_count == 0 {
            return Err(Error::Malformed(
                "anchor string operation count must be positive".into(),
            ));
        }
        if cas_address.is_empty() {
            return Err(Error::Malformed("anchor string CAS address is empty".into()));
        }
        Ok(Self {
            operation_count,
            cas_address: cas_address.to_string(),
        })
    }
}
