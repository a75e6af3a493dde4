use std::fmt;

/// Scheme prefix of an S3 bucket location.
pub const S3_SCHEME: &str = "s3://";

/// Location of an object-storage bucket, `s3://<bucket>`.
///
/// The bucket name is taken verbatim: no trimming, escaping or name validation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StorageUri(String);

impl StorageUri {
    pub fn for_bucket(bucket: &str) -> Self {
        StorageUri(format!("{S3_SCHEME}{bucket}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
