use std::ops::Deref;

/// The unparsed body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBytes(pub Vec<u8>);

impl Deref for RawBytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<u8>> for RawBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&str> for RawBytes {
    fn from(body: &str) -> Self {
        Self(body.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_bytes_from_owned_body() {
        let body = RawBytes::from(b"[]".to_vec());

        assert_eq!(RawBytes::from("[]"), body);
        assert_eq!(2, body.len());
    }

    #[test]
    fn raw_bytes_empty_body() {
        assert!(RawBytes::from(Vec::new()).is_empty());
        assert!(!RawBytes::from("{}").is_empty());
    }
}
