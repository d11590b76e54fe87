use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// GET `url` and return the body as a blob.
pub async fn fetch_blob(url: &str) -> anyhow::Result<web::Blob> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {} failed: {:?}", url, e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("not a Response: {:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {} returned HTTP {}", url, resp.status());
    }
    let blob_promise = resp
        .blob()
        .map_err(|e| anyhow::anyhow!("blob() error: {:?}", e))?;
    let blob = JsFuture::from(blob_promise)
        .await
        .map_err(|e| anyhow::anyhow!("reading body of {} failed: {:?}", url, e))?;
    blob.dyn_into::<web::Blob>()
        .map_err(|e| anyhow::anyhow!("not a Blob: {:?}", e))
}
