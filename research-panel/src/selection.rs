use crate::error::HostError;
use crate::host::TabHost;

/// Current selection in the active tab.
///
/// `Ok(None)` when there is no active tab or nothing is selected.
pub async fn fetch_selection(host: &dyn TabHost) -> Result<Option<String>, HostError> {
    let Some(tab) = host.active_tab().await? else {
        log::debug!("[PANEL] No active tab");
        return Ok(None);
    };

    let text = host.selection_text(tab).await?;
    Ok(text.filter(|t| !t.is_empty()))
}
