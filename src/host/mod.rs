//! Resolve host session
//!
//! Typed surface over the scripting bridge. Constructing a session runs
//! the precondition ladder (API reachable, project open, timeline open,
//! media pool available); each failure maps to its own `HostError`
//! variant and nothing is retried.

pub(crate) mod bridge;

use log::debug;
use serde_json::{Value, json};

use crate::error::HostError;
use crate::pool::{ClipInfo, MediaPool};
use bridge::Bridge;

/// Opaque media pool folder, registered on the sidecar side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FolderHandle(u64);

/// Opaque media pool clip, registered on the sidecar side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClipHandle(u64);

pub(crate) struct HostSession {
    bridge: Bridge,
}

impl HostSession {
    /// Spawn the bridge and verify all host preconditions.
    pub(crate) fn connect() -> Result<Self, HostError> {
        let mut bridge = Bridge::spawn()?;
        bridge.call("connect", Value::Null)?;
        debug!("connected to Resolve, preconditions satisfied");
        Ok(Self { bridge })
    }

    pub(crate) fn current_timeline_name(&mut self) -> Result<String, HostError> {
        let value = self.bridge.call("current_timeline_name", Value::Null)?;
        expect::<String>(value, "timeline name")
    }

    /// Names of every timeline in the current project.
    pub(crate) fn timeline_names(&mut self) -> Result<Vec<String>, HostError> {
        let value = self.bridge.call("timeline_names", Value::Null)?;
        expect::<Vec<String>>(value, "timeline names")
    }

    pub(crate) fn rename_current_timeline(&mut self, name: &str) -> Result<(), HostError> {
        self.bridge
            .call("rename_current_timeline", json!({ "name": name }))?;
        Ok(())
    }

    pub(crate) fn duplicate_current_timeline(&mut self, name: &str) -> Result<(), HostError> {
        self.bridge
            .call("duplicate_current_timeline", json!({ "name": name }))?;
        Ok(())
    }

    /// Move a clip into a folder. `Ok(false)` means the host refused the
    /// move without raising an API error.
    pub(crate) fn move_clip(
        &mut self,
        clip: &ClipHandle,
        folder: &FolderHandle,
    ) -> Result<bool, HostError> {
        let value = self
            .bridge
            .call("move_clip", json!({ "clip": clip.0, "folder": folder.0 }))?;
        Ok(value.as_bool().unwrap_or(false))
    }
}

impl MediaPool for HostSession {
    type Folder = FolderHandle;
    type Clip = ClipHandle;

    fn root(&mut self) -> Result<FolderHandle, HostError> {
        let value = self.bridge.call("root_folder", Value::Null)?;
        Ok(FolderHandle(expect::<u64>(value, "root folder handle")?))
    }

    fn subfolders(&mut self, folder: &FolderHandle) -> Result<Vec<(String, FolderHandle)>, HostError> {
        let value = self.bridge.call("subfolders", json!({ "folder": folder.0 }))?;
        let entries = expect::<Vec<(String, u64)>>(value, "subfolder list")?;
        Ok(entries
            .into_iter()
            .map(|(name, id)| (name, FolderHandle(id)))
            .collect())
    }

    fn add_subfolder(
        &mut self,
        parent: &FolderHandle,
        name: &str,
    ) -> Result<Option<FolderHandle>, HostError> {
        let value = self
            .bridge
            .call("add_subfolder", json!({ "folder": parent.0, "name": name }))?;
        if value.is_null() {
            return Ok(None);
        }
        Ok(Some(FolderHandle(expect::<u64>(value, "folder handle")?)))
    }

    fn clips(&mut self, folder: &FolderHandle) -> Result<Vec<ClipInfo<ClipHandle>>, HostError> {
        let value = self.bridge.call("clips", json!({ "folder": folder.0 }))?;
        let entries = expect::<Vec<(String, String, u64)>>(value, "clip list")?;
        Ok(entries
            .into_iter()
            .map(|(name, kind, id)| ClipInfo {
                name,
                kind,
                handle: ClipHandle(id),
            })
            .collect())
    }
}

fn expect<T: serde::de::DeserializeOwned>(value: Value, what: &str) -> Result<T, HostError> {
    serde_json::from_value(value)
        .map_err(|e| HostError::Protocol(format!("unexpected {what}: {e}")))
}
