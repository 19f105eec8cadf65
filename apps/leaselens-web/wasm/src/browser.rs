//! Browser file handles and the fetch-based analysis service

use async_trait::async_trait;
use leaselens_core::{
    endpoint_url, interpret_response, AnalysisResult, AnalysisService, UploadError, UploadFile,
    UPLOAD_PATH,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FileList, FormData, Request, RequestInit, Response};

use crate::non_empty;

/// Multipart field the service reads the document from
const FILE_FIELD: &str = "file";

/// A `File` from an input element or a drop, with its attributes read once
pub struct BrowserFile {
    file: web_sys::File,
    name: String,
    mime_type: Option<String>,
    size_bytes: u64,
}

impl BrowserFile {
    pub fn new(file: web_sys::File) -> Self {
        let name = file.name();
        let mime_type = non_empty(&file.type_()).map(str::to_string);
        let size_bytes = file.size() as u64;
        Self {
            file,
            name,
            mime_type,
            size_bytes,
        }
    }

    pub fn file(&self) -> &web_sys::File {
        &self.file
    }
}

impl UploadFile for BrowserFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}

/// Every file in a `FileList`, in order
pub fn files_from_list(list: Option<FileList>) -> Vec<BrowserFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(BrowserFile::new)
        .collect()
}

/// Posts the file as multipart form data with `window.fetch`
pub struct FetchAnalysisService {
    upload_url: String,
}

impl FetchAnalysisService {
    pub fn new(base_url: &str) -> Self {
        Self {
            upload_url: endpoint_url(base_url, UPLOAD_PATH),
        }
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    /// Status code and body text of the upload response
    async fn send(&self, file: &BrowserFile) -> Result<(u16, String), JsValue> {
        let form = FormData::new()?;
        form.append_with_blob_and_filename(FILE_FIELD, file.file(), file.name())?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&form);
        let request = Request::new_with_str_and_init(&self.upload_url, &init)?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await?
            .dyn_into()?;

        let body = JsFuture::from(response.text()?)
            .await?
            .as_string()
            .unwrap_or_default();

        Ok((response.status(), body))
    }
}

#[async_trait(?Send)]
impl AnalysisService for FetchAnalysisService {
    type File = BrowserFile;

    async fn analyze(&self, file: &BrowserFile) -> Result<AnalysisResult, UploadError> {
        let (status, body) = self
            .send(file)
            .await
            .map_err(|e| UploadError::Unexpected(js_error_message(&e)))?;
        interpret_response(status, &body)
    }
}

/// Best-effort text for a thrown JS value
pub(crate) fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| "Request failed".to_string())
}
