//! Stateful upload session
//!
//! One session backs one upload zone. The orchestrator records its notifications
//! while it is borrowed; they are handed to the page's callbacks only after the
//! borrow is released, so a callback may read the session's getters.

use std::cell::RefCell;
use std::rc::Rc;

use leaselens_core::{
    AnalysisResult, AnalysisService, AttemptId, DragDisposition, DropZone, RecordingReporter,
    ReporterEvent, UploadError, UploadFile, UploadOrchestrator, UploadTicket,
    GENERIC_ERROR_MESSAGE,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{console, DragEvent, Event, HtmlInputElement};

use crate::browser::{files_from_list, js_error_message, BrowserFile, FetchAnalysisService};

/// Orchestrator plus drag state, free of any JS handle
struct SessionState {
    orchestrator: UploadOrchestrator<RecordingReporter>,
    drop_zone: DropZone,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            orchestrator: UploadOrchestrator::new(RecordingReporter::new()),
            drop_zone: DropZone::new(),
        }
    }
}

impl SessionState {
    /// Offer files; returns the ticket to send, if any, and the notifications raised
    fn accept<F: UploadFile>(
        &mut self,
        files: Vec<F>,
    ) -> (Option<UploadTicket<F>>, Vec<ReporterEvent>) {
        let ticket = self.orchestrator.begin(files);
        (ticket, self.orchestrator.reporter_mut().take_events())
    }

    fn finish(
        &mut self,
        attempt: AttemptId,
        outcome: Result<AnalysisResult, UploadError>,
    ) -> Vec<ReporterEvent> {
        self.orchestrator.complete(attempt, outcome);
        self.orchestrator.reporter_mut().take_events()
    }

    fn drop_files<F: UploadFile>(
        &mut self,
        files: Vec<F>,
    ) -> (DragDisposition, Option<UploadTicket<F>>, Vec<ReporterEvent>) {
        let (disposition, files) = self.drop_zone.drop(files);
        if !DropZone::is_interactive(self.orchestrator.is_loading()) {
            return (disposition, None, Vec::new());
        }
        let (ticket, events) = self.accept(files);
        (disposition, ticket, events)
    }
}

/// The page's `onSuccess`, `onError` and `onLoadingChange`
struct Callbacks {
    on_success: js_sys::Function,
    on_error: js_sys::Function,
    on_loading_change: js_sys::Function,
}

impl Callbacks {
    fn dispatch(&self, events: Vec<ReporterEvent>) {
        for event in events {
            let outcome = match event {
                ReporterEvent::Success(result) => self.success(&result),
                ReporterEvent::Error(message) => self.error(&message),
                ReporterEvent::LoadingChange(flag) => self
                    .on_loading_change
                    .call1(&JsValue::NULL, &JsValue::from_bool(flag)),
            };
            if let Err(e) = outcome {
                console::warn_1(&format!("Page callback threw: {}", js_error_message(&e)).into());
            }
        }
    }

    /// A result the page cannot receive is reported as a failed attempt
    fn success(&self, result: &AnalysisResult) -> Result<JsValue, JsValue> {
        match serde_wasm_bindgen::to_value(result) {
            Ok(value) => self.on_success.call1(&JsValue::NULL, &value),
            Err(e) => {
                console::error_1(
                    &format!("Cannot hand the analysis result to the page: {}", e).into(),
                );
                self.error(GENERIC_ERROR_MESSAGE)
            }
        }
    }

    fn error(&self, message: &str) -> Result<JsValue, JsValue> {
        self.on_error
            .call1(&JsValue::NULL, &JsValue::from_str(message))
    }
}

fn apply(event: &Event, disposition: DragDisposition) {
    match disposition {
        DragDisposition::PreventDefault => {
            event.prevent_default();
            event.stop_propagation();
        }
    }
}

/// Upload zone bound to one analysis service
#[wasm_bindgen]
pub struct UploadSession {
    state: Rc<RefCell<SessionState>>,
    service: Rc<FetchAnalysisService>,
    callbacks: Rc<Callbacks>,
}

#[wasm_bindgen]
impl UploadSession {
    /// Create a session posting to `{api_url}/upload`
    #[wasm_bindgen(constructor)]
    pub fn new(
        api_url: &str,
        on_success: js_sys::Function,
        on_error: js_sys::Function,
        on_loading_change: js_sys::Function,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(SessionState::default())),
            service: Rc::new(FetchAnalysisService::new(api_url)),
            callbacks: Rc::new(Callbacks {
                on_success,
                on_error,
                on_loading_change,
            }),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> String {
        self.state.borrow().orchestrator.status().as_str().to_string()
    }

    #[wasm_bindgen(getter = isLoading)]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().orchestrator.is_loading()
    }

    /// Whether the drop target and file input accept input
    #[wasm_bindgen(getter = isInteractive)]
    pub fn is_interactive(&self) -> bool {
        DropZone::is_interactive(self.is_loading())
    }

    #[wasm_bindgen(getter = isDragActive)]
    pub fn is_drag_active(&self) -> bool {
        self.state.borrow().drop_zone.is_drag_active()
    }

    /// `{ headline, detail }` for the current status
    #[wasm_bindgen(getter = statusText)]
    pub fn status_text(&self) -> Result<JsValue, JsValue> {
        let text = self.state.borrow().orchestrator.status_text();
        serde_wasm_bindgen::to_value(&text)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// `lease.pdf (2.00 MB)` while an attempt is shown
    #[wasm_bindgen(getter = fileInfo)]
    pub fn file_info(&self) -> Option<String> {
        self.state.borrow().orchestrator.file_info()
    }

    #[wasm_bindgen(getter = errorMessage)]
    pub fn error_message(&self) -> Option<String> {
        self.state
            .borrow()
            .orchestrator
            .error_message()
            .map(str::to_string)
    }

    #[wasm_bindgen(js_name = handleDragEnter)]
    pub fn handle_drag_enter(&self, event: &DragEvent) {
        let disposition = self.state.borrow_mut().drop_zone.drag_enter();
        apply(event, disposition);
    }

    #[wasm_bindgen(js_name = handleDragOver)]
    pub fn handle_drag_over(&self, event: &DragEvent) {
        let disposition = self.state.borrow_mut().drop_zone.drag_over();
        apply(event, disposition);
    }

    #[wasm_bindgen(js_name = handleDragLeave)]
    pub fn handle_drag_leave(&self, event: &DragEvent) {
        let disposition = self.state.borrow_mut().drop_zone.drag_leave();
        apply(event, disposition);
    }

    #[wasm_bindgen(js_name = handleDrop)]
    pub fn handle_drop(&self, event: &DragEvent) {
        let files = files_from_list(event.data_transfer().and_then(|dt| dt.files()));
        let (disposition, ticket, events) = self.state.borrow_mut().drop_files(files);
        apply(event, disposition);
        self.callbacks.dispatch(events);
        if let Some(ticket) = ticket {
            self.send(ticket);
        }
    }

    /// `change` handler for the file input
    #[wasm_bindgen(js_name = handleFileSelect)]
    pub fn handle_file_select(&self, input: &HtmlInputElement) {
        let files = files_from_list(input.files());
        let (ticket, events) = self.state.borrow_mut().accept(files);
        self.callbacks.dispatch(events);
        if let Some(ticket) = ticket {
            self.send(ticket);
        }
    }

    /// "Try again" after a failure; returns whether the session went back to idle
    pub fn retry(&self, input: Option<HtmlInputElement>) -> bool {
        let cleared = self.state.borrow_mut().orchestrator.retry();
        if cleared {
            clear_input(input);
        }
        cleared
    }

    /// "Analyze another"; returns whether the session went back to idle
    pub fn reset(&self, input: Option<HtmlInputElement>) -> bool {
        let cleared = self.state.borrow_mut().orchestrator.reset();
        if cleared {
            clear_input(input);
        }
        cleared
    }

    fn send(&self, ticket: UploadTicket<BrowserFile>) {
        let state = Rc::clone(&self.state);
        let service = Rc::clone(&self.service);
        let callbacks = Rc::clone(&self.callbacks);

        spawn_local(async move {
            let outcome = service.analyze(&ticket.file).await;
            let events = state.borrow_mut().finish(ticket.attempt, outcome);
            callbacks.dispatch(events);
        });
    }
}

/// Selecting the same file again must fire `change`
fn clear_input(input: Option<HtmlInputElement>) {
    if let Some(input) = input {
        input.set_value("");
    }
}
