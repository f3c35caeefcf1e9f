//! File System Toucher Implementation
//!
//! Toucherのファイルシステム実装

use chrono::Local;
use filetime::FileTime;
use log::debug;
use std::fs::{DirBuilder, File};
use std::io;
use std::path::Path;
use std::time::SystemTime;

use crate::adapter::config::Config;
use crate::domain::entities::touch_error::TouchError;
use crate::domain::repositories::toucher::Toucher;

/// ホストのファイルシステムを直接操作するToucher
#[derive(Debug, Clone)]
pub struct FsToucher {
    dir_mode: u32,
}

impl FsToucher {
    /// 設定から新しいToucherを作成
    pub fn new(config: &Config) -> Self {
        Self {
            dir_mode: config.dir_mode,
        }
    }

    /// 親ディレクトリを祖先も含めて作成する
    ///
    /// 末尾が区切り文字のパス（`a/b/`）はパス自体をディレクトリとして扱う。
    /// 親を持たないパス（`foo`）では何もしない
    fn create_parent_dirs(&self, path: &Path) -> io::Result<()> {
        let parent = match parent_dir(path) {
            Some(parent) => parent,
            None => return Ok(()),
        };

        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(self.dir_mode);
        }
        builder.create(parent)?;
        debug!("Created parent directories: {}", parent.display());

        Ok(())
    }

    fn current_time() -> FileTime {
        FileTime::from_system_time(SystemTime::from(Local::now()))
    }
}

/// Directory that has to exist before `path` can be created
fn parent_dir(path: &Path) -> Option<&Path> {
    let ends_with_separator = path
        .as_os_str()
        .as_encoded_bytes()
        .last()
        .is_some_and(|&b| std::path::is_separator(b as char));
    if ends_with_separator {
        return Some(path);
    }

    path.parent().filter(|parent| !parent.as_os_str().is_empty())
}

impl Toucher for FsToucher {
    fn touch(&self, path: &Path) -> Result<(), TouchError> {
        self.create_parent_dirs(path).map_err(TouchError::DirectoryCreation)?;

        // The handle stays open until this function returns.
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let created = File::create(path).map_err(TouchError::Create)?;
                drop(created);
                debug!("Created empty file: {}", path.display());
                return Ok(());
            }
            Err(e) => return Err(TouchError::Open(e)),
        };

        let metadata = file.metadata().map_err(TouchError::Metadata)?;
        if metadata.is_dir() {
            return Err(TouchError::IsDirectory);
        }

        let now = Self::current_time();
        filetime::set_file_times(path, now, now).map_err(TouchError::TimestampUpdate)?;
        debug!("Updated timestamps: {}", path.display());

        Ok(())
    }
}

impl Default for FsToucher {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
