// ATS scanning API: multipart upload handling and the scan, parse-resume and
// extract-keywords endpoints. Analysis itself lives in `crate::analysis`.

pub mod handlers;
pub mod upload;
