//! Multipart request bodies.
//!
//! Text fields are plain data so callers can build and inspect a form on any
//! target; file parts only exist in the browser, where they are `web_sys`
//! handles picked from an `<input type="file">`.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

#[cfg(feature = "hydrate")]
use super::error::ApiError;

/// Ordered `multipart/form-data` parts.
#[derive(Clone, Debug, Default)]
pub struct MultipartForm {
    fields: Vec<(String, String)>,
    #[cfg(feature = "hydrate")]
    files: Vec<(String, web_sys::File)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Attach a file part; uploaded under the file's own name.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn file(mut self, name: impl Into<String>, file: web_sys::File) -> Self {
        self.files.push((name.into(), file));
        self
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Value of the first text field called `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    #[cfg(feature = "hydrate")]
    pub(crate) fn to_form_data(&self) -> Result<web_sys::FormData, ApiError> {
        let js_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("form data: {e:?}"));
        let form = web_sys::FormData::new().map_err(js_err)?;
        for (name, value) in &self.fields {
            form.append_with_str(name, value).map_err(js_err)?;
        }
        for (name, file) in &self.files {
            form.append_with_blob_and_filename(name, file, &file.name()).map_err(js_err)?;
        }
        Ok(form)
    }
}
