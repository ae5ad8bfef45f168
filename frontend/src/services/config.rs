use shared::ClientConfig;

pub const API_BASE_META: &str = "transactions-api-base";
pub const PAGE_SIZE_META: &str = "transactions-page-size";
pub const LOG_LEVEL_META: &str = "log-level";

/// `content` of `<meta name="...">` in the host page, if present
fn meta_content(name: &str) -> Option<String> {
    gloo::utils::document()
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()
        .and_then(|element| element.get_attribute("content"))
}

/// Read overrides from the host page. Rejected values are returned for logging
/// once the logger is up.
pub fn load_config() -> (ClientConfig, Vec<String>) {
    let api_base = meta_content(API_BASE_META);
    let page_size = meta_content(PAGE_SIZE_META);
    let log_level = meta_content(LOG_LEVEL_META);

    ClientConfig::with_overrides(api_base.as_deref(), page_size.as_deref(), log_level.as_deref())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn set_meta(name: &str, content: &str) {
        let document = gloo::utils::document();
        let meta = document.create_element("meta").unwrap();
        meta.set_attribute("name", name).unwrap();
        meta.set_attribute("content", content).unwrap();
        document.head().unwrap().append_child(&meta).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_missing_meta_is_none() {
        assert_eq!(meta_content("no-such-meta"), None);
    }

    #[wasm_bindgen_test]
    fn test_load_config_reads_host_page() {
        set_meta(API_BASE_META, "/ledger/api/");
        set_meta(PAGE_SIZE_META, "25");

        let (config, rejected) = load_config();
        assert_eq!(config.api_base, "/ledger/api");
        assert_eq!(config.page_size, 25);
        assert!(rejected.is_empty());
    }
}
