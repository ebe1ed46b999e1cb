use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub state: PowerState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loader: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modpack: Option<String>,  // version id of the installed modpack
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modpack_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    #[serde(default)]
    pub backups: Vec<ServerBackup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerBackup {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModpackVersion {
    pub id: String,
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_number: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    Starting,
    Running,
    Stopping,
    #[default]
    Stopped,
    Crashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerAction {
    Start,
    Stop,
    Restart,
    Kill,
}

/// Partial server record for shallow-merge updates.
/// Fields left as `None` are not touched by the merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<PowerState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loader: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modpack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modpack_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backups: Option<Vec<ServerBackup>>,
}

impl ServerPatch {
    /// Names of the fields this patch carries
    pub fn changed_fields(&self) -> Vec<String> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push("name".to_string());
        }
        if self.state.is_some() {
            fields.push("state".to_string());
        }
        if self.subdomain.is_some() {
            fields.push("subdomain".to_string());
        }
        if self.game_version.is_some() {
            fields.push("game_version".to_string());
        }
        if self.loader.is_some() {
            fields.push("loader".to_string());
        }
        if self.modpack.is_some() {
            fields.push("modpack".to_string());
        }
        if self.modpack_id.is_some() {
            fields.push("modpack_id".to_string());
        }
        if self.project.is_some() {
            fields.push("project".to_string());
        }
        if self.backups.is_some() {
            fields.push("backups".to_string());
        }
        fields
    }
}

impl Server {
    /// Applies a partial update, overwriting only the fields the patch carries
    pub fn merge(&mut self, patch: ServerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(state) = patch.state {
            self.state = state;
        }
        if let Some(subdomain) = patch.subdomain {
            self.subdomain = Some(subdomain);
        }
        if let Some(game_version) = patch.game_version {
            self.game_version = Some(game_version);
        }
        if let Some(loader) = patch.loader {
            self.loader = Some(loader);
        }
        if let Some(modpack) = patch.modpack {
            self.modpack = Some(modpack);
        }
        if let Some(modpack_id) = patch.modpack_id {
            self.modpack_id = Some(modpack_id);
        }
        if let Some(project) = patch.project {
            self.project = Some(project);
        }
        if let Some(backups) = patch.backups {
            self.backups = backups;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_server() -> Server {
        Server {
            id: "srv1".to_string(),
            name: "Survival".to_string(),
            state: PowerState::Running,
            subdomain: Some("survival".to_string()),
            game_version: Some("1.21.1".to_string()),
            loader: Some("fabric".to_string()),
            modpack: None,
            modpack_id: None,
            project: None,
            backups: vec![],
        }
    }

    #[test]
    fn test_merge_overwrites_only_present_fields() {
        let mut server = sample_server();
        server.merge(ServerPatch {
            name: Some("Creative".to_string()),
            ..Default::default()
        });

        assert_eq!(server.name, "Creative");
        assert_eq!(server.state, PowerState::Running);
        assert_eq!(server.subdomain.as_deref(), Some("survival"));
        assert_eq!(server.loader.as_deref(), Some("fabric"));
    }

    #[test]
    fn test_merge_replaces_backup_list_wholesale() {
        let mut server = sample_server();
        let backup = ServerBackup {
            id: "bak1".to_string(),
            name: "pre-update".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        server.merge(ServerPatch {
            backups: Some(vec![backup]),
            ..Default::default()
        });

        assert_eq!(server.backups.len(), 1);
        assert_eq!(server.backups[0].id, "bak1");
    }

    #[test]
    fn test_power_state_deserializes_lowercase() {
        let state: PowerState = serde_json::from_str("\"running\"").unwrap();
        assert_eq!(state, PowerState::Running);
    }
}
