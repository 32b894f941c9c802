use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Media pool path \"{path}\" doesn't exist (missing folder: \"{missing}\")")]
    PathNotFound { path: String, missing: String },

    #[error("Couldn't create media pool folder \"{name}\" for path \"{path}\"")]
    FolderCreate { path: String, name: String },

    #[error("Couldn't find timeline \"{name}\" in the media pool")]
    TimelineClipNotFound { name: String },

    #[error("Couldn't move timeline \"{name}\" into \"{folder}\"")]
    MoveFailed { name: String, folder: String },

    #[error("{0}")]
    Host(#[from] HostError),
}

#[derive(Debug, Error)]
pub(crate) enum HostError {
    #[error("Couldn't reach the Resolve scripting API. Is DaVinci Resolve running?")]
    NotRunning,

    #[error("Couldn't get the current project. Is a project open in Resolve?")]
    NoProject,

    #[error("Couldn't get the current timeline. Is a timeline open in Resolve?")]
    NoTimeline,

    #[error("Couldn't get Resolve's media pool")]
    NoMediaPool,

    #[error("Failed to start the scripting bridge: {0}")]
    Spawn(std::io::Error),

    #[error("Scripting bridge I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid response from the scripting bridge: {0}")]
    Protocol(String),

    #[error("Resolve API error: {0}")]
    Rpc(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_path_not_found() {
        let e = AppError::PathNotFound {
            path: "/Edits/@Snapshots".to_string(),
            missing: "@Snapshots".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Media pool path "/Edits/@Snapshots" doesn't exist (missing folder: "@Snapshots")"#
        );
    }

    #[test]
    fn app_error_display_clip_not_found() {
        let e = AppError::TimelineClipNotFound {
            name: "Edit V2".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Couldn't find timeline "Edit V2" in the media pool"#
        );
    }

    #[test]
    fn host_error_not_running() {
        assert_eq!(
            HostError::NotRunning.to_string(),
            "Couldn't reach the Resolve scripting API. Is DaVinci Resolve running?"
        );
    }

    #[test]
    fn host_error_rpc() {
        let e = HostError::Rpc("DuplicateTimeline returned None".to_string());
        assert_eq!(
            e.to_string(),
            "Resolve API error: DuplicateTimeline returned None"
        );
    }

    #[test]
    fn app_error_from_host_error() {
        let host = HostError::NoProject;
        let app: AppError = host.into();
        assert_eq!(
            app.to_string(),
            "Couldn't get the current project. Is a project open in Resolve?"
        );
    }
}
