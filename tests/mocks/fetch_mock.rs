use wasm_bindgen::prelude::*;

/// This module replaces `window.fetch` so components that talk to the API
/// can be tested without a running server.

#[wasm_bindgen(inline_js = r#"
export function setup_fetch_mock(status, body) {
    if (!window.__originalFetch) {
        window.__originalFetch = window.fetch;
    }
    window.__lastFetchBody = "";

    window.fetch = async function(input, init) {
        const request = input instanceof Request ? input : new Request(input, init);
        window.__lastFetchBody = await request.text();
        console.log("[MOCK FETCH]", request.method, request.url, "->", status);
        return new Response(body, {
            status: status,
            headers: { "Content-Type": "application/json" },
        });
    };
    return true;
}

export function last_fetch_body() {
    return window.__lastFetchBody || "";
}

export function restore_fetch() {
    if (window.__originalFetch) {
        window.fetch = window.__originalFetch;
        delete window.__originalFetch;
    }
}
"#)]
extern "C" {
    /// Every fetch answers `status` with the JSON `body`
    pub fn setup_fetch_mock(status: u16, body: &str) -> bool;

    /// Body of the most recent request seen by the mock
    pub fn last_fetch_body() -> String;

    pub fn restore_fetch();
}
