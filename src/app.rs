//! Snapshot orchestration
//!
//! A snapshot freezes the current timeline under the next version name
//! and hands a duplicate back under the original name, so the editor
//! keeps working on a timeline whose name never changes.

use log::{debug, info};

use crate::error::AppError;
use crate::host::HostSession;
use crate::pool::{find_timeline_clip, resolve_folder_path};
use crate::version::next_version_name;

pub(crate) struct SnapshotOptions {
    /// Print the next version name and stop before any mutation.
    pub(crate) dry_run: bool,
    /// File the snapshot into the archive subfolder after cloning.
    pub(crate) archive: bool,
    pub(crate) archive_folder: String,
}

/// Run the `new` command against the host.
pub(crate) fn create_snapshot(opts: &SnapshotOptions) -> Result<(), AppError> {
    let mut session = HostSession::connect()?;

    let current = session.current_timeline_name()?;
    debug!("current timeline: \"{current}\"");

    let siblings = session.timeline_names()?;
    let next = next_version_name(&current, &siblings);
    info!("next snapshot version: \"{next}\"");

    if opts.dry_run {
        println!("{next}");
        return Ok(());
    }

    // Rename the original into the snapshot, then duplicate it back
    // under the working name.
    info!("cloning timeline");
    session.rename_current_timeline(&next)?;
    session.duplicate_current_timeline(&current)?;
    println!("Created snapshot \"{next}\"");

    if !opts.archive {
        return Ok(());
    }
    archive_snapshot(&mut session, &next, &opts.archive_folder)
}

/// Move the snapshot's timeline clip into `<its folder>/<archive_folder>`,
/// creating the archive folder when missing.
fn archive_snapshot(
    session: &mut HostSession,
    name: &str,
    archive_folder: &str,
) -> Result<(), AppError> {
    let (clip, folder_path) =
        find_timeline_clip(session, name)?.ok_or_else(|| AppError::TimelineClipNotFound {
            name: name.to_string(),
        })?;

    let archive_path = if folder_path == "/" {
        format!("/{archive_folder}")
    } else {
        format!("{folder_path}/{archive_folder}")
    };
    debug!("archiving into \"{archive_path}\"");

    let folder = resolve_folder_path(session, &archive_path, true)?;
    if !session.move_clip(&clip, &folder)? {
        return Err(AppError::MoveFailed {
            name: name.to_string(),
            folder: archive_path,
        });
    }

    info!("filed snapshot into \"{archive_path}\"");
    Ok(())
}
