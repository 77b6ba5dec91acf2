//! The interaction record and its on-disk text layout.

/// Header line preceding the request text.
pub const REQUEST_MARKER: &str = "--- LLM Request ---";

/// Header line preceding the response text.
pub const RESPONSE_MARKER: &str = "--- LLM Response ---";

/// One request/response exchange with an LLM.
///
/// Both sides are stored verbatim. There is no validation and no size limit;
/// whatever the caller sent and received is what ends up in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub request: String,
    pub response: String,
}

impl Interaction {
    pub fn new(request: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            request: request.into(),
            response: response.into(),
        }
    }

    /// Render the interaction as log file content.
    ///
    /// Layout is fixed: request marker, request, blank line, response marker,
    /// response, and exactly one trailing newline.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(
            REQUEST_MARKER.len()
                + RESPONSE_MARKER.len()
                + self.request.len()
                + self.response.len()
                + 5,
        );
        out.push_str(REQUEST_MARKER);
        out.push('\n');
        out.push_str(&self.request);
        out.push_str("\n\n");
        out.push_str(RESPONSE_MARKER);
        out.push('\n');
        out.push_str(&self.response);
        out.push('\n');
        out
    }
}
