//! Copying static pages and public assets into the output directory

use anyhow::{Context, Result};
use std::fs::{self, File, FileTimes};
use std::path::Path;
use walkdir::WalkDir;

/// Copy one file, overwriting `dest` and keeping the source timestamps
pub fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    fs::copy(src, dest)
        .with_context(|| format!("copying {} to {}", src.display(), dest.display()))?;

    let meta = fs::metadata(src)?;
    let mut times = FileTimes::new();
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    File::options()
        .write(true)
        .open(dest)
        .and_then(|f| f.set_times(times))
        .with_context(|| format!("setting times on {}", dest.display()))?;

    Ok(())
}

/// Mirror every file below `src` into `dest`, keeping relative paths
///
/// Returns the number of files copied; a missing `src` copies nothing.
pub fn mirror_dir(src: &Path, dest: &Path) -> Result<usize> {
    if !src.is_dir() {
        tracing::debug!("No asset directory at {:?}, skipping", src);
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", src.display()))?;
        let relative = entry.path().strip_prefix(src)?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("creating {}", target.display()))?;
        } else {
            copy_file(entry.path(), &target)?;
            tracing::debug!("Copied: {:?} -> {:?}", entry.path(), target);
            copied += 1;
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    #[test]
    fn test_copy_file_keeps_mtime() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("a.txt");
        fs::write(&src, "hello").unwrap();

        let past = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        File::options()
            .write(true)
            .open(&src)
            .unwrap()
            .set_modified(past)
            .unwrap();

        let dest = dir.path().join("out").join("a.txt");
        copy_file(&src, &dest).unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "hello");
        assert_eq!(fs::metadata(&dest).unwrap().modified().unwrap(), past);
    }

    #[test]
    fn test_copy_file_overwrites() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("a.txt");
        let dest = dir.path().join("b.txt");
        fs::write(&src, "new").unwrap();
        fs::write(&dest, "old").unwrap();

        copy_file(&src, &dest).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn test_mirror_dir() {
        let dir = TempDir::new().unwrap();
        let public = dir.path().join("public");
        fs::create_dir_all(public.join("img/icons")).unwrap();
        fs::write(public.join("robots.txt"), "User-agent: *").unwrap();
        fs::write(public.join("img/icons/star.svg"), "<svg/>").unwrap();

        let dist = dir.path().join("dist");
        let copied = mirror_dir(&public, &dist).unwrap();

        assert_eq!(copied, 2);
        assert!(dist.join("robots.txt").is_file());
        assert_eq!(
            fs::read_to_string(dist.join("img/icons/star.svg")).unwrap(),
            "<svg/>"
        );
    }

    #[test]
    fn test_mirror_missing_dir() {
        let dir = TempDir::new().unwrap();
        let copied = mirror_dir(&dir.path().join("public"), &dir.path().join("dist")).unwrap();
        assert_eq!(copied, 0);
    }
}
