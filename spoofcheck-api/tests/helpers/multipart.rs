//! Raw multipart/form-data body assembly
//!
//! Requests are driven through the router directly with `oneshot`, so the
//! multipart body is built by hand instead of going through an HTTP client.

/// Assemble a multipart body with a single file part
///
/// The matching request needs a
/// `content-type: multipart/form-data; boundary=<boundary>` header.
pub fn multipart_body(boundary: &str, field_name: &str, filename: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field_name, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());
    body
}
