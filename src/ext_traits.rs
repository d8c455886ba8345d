//! Extension traits for parsing wire bytes into typed structures.

use error_stack::ResultExt;
use serde::Deserialize;

use crate::errors::{self, CustomResult};

/// Extending functionalities of `[u8]` for performing parsing
pub trait ByteSliceExt<T> {
    /// Convert `[u8]` into type `<T>` by using `serde::Deserialize`
    fn parse_struct<'de>(
        &'de self,
        type_name: &'static str,
    ) -> CustomResult<T, errors::ParsingError>
    where
        T: Deserialize<'de>;
}

impl<T> ByteSliceExt<T> for [u8] {
    fn parse_struct<'de>(
        &'de self,
        type_name: &'static str,
    ) -> CustomResult<T, errors::ParsingError>
    where
        T: Deserialize<'de>,
    {
        serde_json::from_slice(self)
            .change_context(errors::ParsingError::StructParseFailure(type_name))
            .attach_printable_lazy(|| format!("Unable to parse {type_name} from bytes"))
    }
}

/// Extending functionalities of [`bytes::Bytes`] for performing parsing
pub trait BytesExt<T> {
    /// Convert [`bytes::Bytes`] into type `<T>` using `serde::Deserialize`
    fn parse_struct<'de>(
        &'de self,
        type_name: &'static str,
    ) -> CustomResult<T, errors::ParsingError>
    where
        T: Deserialize<'de>;
}

impl<T> BytesExt<T> for bytes::Bytes {
    fn parse_struct<'de>(
        &'de self,
        type_name: &'static str,
    ) -> CustomResult<T, errors::ParsingError>
    where
        T: Deserialize<'de>,
    {
        use bytes::Buf;

        serde_json::from_slice(self.chunk())
            .change_context(errors::ParsingError::StructParseFailure(type_name))
            .attach_printable_lazy(|| format!("Unable to parse {type_name} from bytes"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Response;

    #[test]
    fn parse_struct_reads_valid_json() {
        let body = br#"{"success":true}"#;
        let response: Response = body.parse_struct("Response").unwrap();
        assert!(response.success);
    }

    #[test]
    fn parse_struct_rejects_missing_required_field() {
        let body = br#"{}"#;
        let result: CustomResult<Response, _> = body.parse_struct("Response");
        assert!(result.is_err());
    }

    #[test]
    fn parse_struct_works_on_bytes() {
        let body = bytes::Bytes::from_static(br#"{"success":false}"#);
        let response: Response = body.parse_struct("Response").unwrap();
        assert!(!response.success);
    }
}
