use crate::window::{WindowId, WindowRecord};
use serde::Serialize;

/// Icon shown for windows whose application could not be resolved.
pub const MISSING_ICON: &str = "icon-missing";

pub const PROVIDER_ID: &str = "window-search-provider";
pub const PROVIDER_NAME: &str = "Open Windows";
pub const PROVIDER_DESCRIPTION: &str = "List of open windows";
pub const PROVIDER_ICON: &str = "focus-windows-symbolic";

/// Static description of the provider for the host's search UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub can_launch_search: bool,
}

impl Default for ProviderInfo {
    fn default() -> Self {
        Self {
            id: PROVIDER_ID,
            name: PROVIDER_NAME,
            description: PROVIDER_DESCRIPTION,
            icon: PROVIDER_ICON,
            can_launch_search: true,
        }
    }
}

/// Icon to render next to a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ResultIcon {
    /// Icon of the owning application
    App { name: String },
    Missing,
}

impl ResultIcon {
    #[must_use]
    pub fn icon_name(&self) -> &str {
        match self {
            Self::App { name } => name,
            Self::Missing => MISSING_ICON,
        }
    }
}

/// What the host displays for one result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultMeta {
    pub id: WindowId,

    /// `"{workspace}: {title}"`
    pub name: String,

    /// Application name
    pub description: String,

    pub icon: ResultIcon,
}

impl ResultMeta {
    #[must_use]
    pub fn from_record<H>(record: &WindowRecord<H>) -> Self {
        let icon = record
            .app_icon
            .as_ref()
            .map_or(ResultIcon::Missing, |name| ResultIcon::App { name: name.clone() });

        Self {
            id: record.id.clone(),
            name: record.display_name(),
            description: record.app_name.clone(),
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::WindowInfo;

    fn record(app_icon: Option<&str>) -> WindowRecord<()> {
        WindowRecord::from_info(
            1,
            WindowInfo {
                stable_id: 77,
                title: "Inbox".to_string(),
                app_name: Some("Thunderbird".to_string()),
                app_icon: app_icon.map(String::from),
                workspace_index: 0,
                handle: (),
            },
        )
    }

    #[test]
    fn test_meta_from_record() {
        let meta = ResultMeta::from_record(&record(Some("thunderbird")));
        assert_eq!(meta.id, WindowId::new(1, 77));
        assert_eq!(meta.name, "1: Inbox");
        assert_eq!(meta.description, "Thunderbird");
        assert_eq!(meta.icon.icon_name(), "thunderbird");
    }

    #[test]
    fn test_meta_missing_icon() {
        let meta = ResultMeta::from_record(&record(None));
        assert_eq!(meta.icon, ResultIcon::Missing);
        assert_eq!(meta.icon.icon_name(), MISSING_ICON);
    }

    #[test]
    fn test_meta_serializes_camel_case() {
        let meta = ResultMeta::from_record(&record(Some("thunderbird")));
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["id"], "1-77");
        assert_eq!(json["icon"]["type"], "app");
        assert_eq!(json["icon"]["name"], "thunderbird");
    }

    #[test]
    fn test_provider_info_default() {
        let info = ProviderInfo::default();
        assert_eq!(info.name, "Open Windows");
        assert_eq!(info.description, "List of open windows");
        assert!(info.can_launch_search);
    }
}
