//! Touch Integration Tests
//!
//! FsToucher と TouchFilesUseCase を実ファイルシステム上で組み合わせたテスト

use filetime::FileTime;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use touchd::adapter::config::Config;
use touchd::adapter::repositories::fs_toucher::FsToucher;
use touchd::application::use_cases::touch_files::TouchFilesUseCase;
use touchd::domain::entities::touch_error::TouchError;

fn use_case() -> TouchFilesUseCase<FsToucher> {
    TouchFilesUseCase::new(Arc::new(FsToucher::new(&Config::default())))
}

#[test]
fn test_create_regular_file() {
    let temp_dir = TempDir::new().unwrap();
    let foo = temp_dir.path().join("foo");

    use_case().execute(&[&foo]).unwrap();

    assert!(foo.is_file());
    assert_eq!(fs::metadata(&foo).unwrap().len(), 0);
}

#[test]
fn test_create_nested_file() {
    let temp_dir = TempDir::new().unwrap();
    let z = temp_dir.path().join("x").join("y").join("z");

    use_case().execute(&[&z]).unwrap();

    assert!(temp_dir.path().join("x").is_dir());
    assert!(temp_dir.path().join("x").join("y").is_dir());
    assert!(z.is_file());
}

#[test]
fn test_create_multiple_nested_files() {
    let temp_dir = TempDir::new().unwrap();
    let a = temp_dir.path().join("foo").join("bar");
    let b = temp_dir.path().join("foo").join("baz");

    use_case().execute(&[&a, &b]).unwrap();

    assert!(a.is_file());
    assert!(b.is_file());
}

#[test]
fn test_conflicting_inner_dir() {
    let temp_dir = TempDir::new().unwrap();
    let bar = temp_dir.path().join("foo").join("bar");
    let baz = bar.join("baz");

    let err = use_case().execute(&[&bar, &baz]).unwrap_err();

    assert_eq!(err.len(), 1);
    assert_eq!(err.failures()[0].path(), baz.as_path());
    assert!(matches!(
        err.failures()[0].error(),
        TouchError::DirectoryCreation(_)
    ));
    assert!(err
        .to_string()
        .starts_with(&format!("failed to touch file: [{}: ", baz.display())));
    assert!(bar.is_file());
}

#[test]
fn test_conflicting_outer_dir() {
    let temp_dir = TempDir::new().unwrap();
    let foo = temp_dir.path().join("foo");
    let bar = foo.join("bar");

    let err = use_case().execute(&[&bar, &foo]).unwrap_err();

    assert_eq!(err.len(), 1);
    assert_eq!(err.failures()[0].path(), foo.as_path());
    assert!(matches!(err.failures()[0].error(), TouchError::IsDirectory));
    assert_eq!(
        err.to_string(),
        format!("failed to touch file: [{}: exists as directory]", foo.display())
    );
    assert!(bar.is_file());
}

#[test]
fn test_already_existing_file_twice() {
    let temp_dir = TempDir::new().unwrap();
    let test = temp_dir.path().join("test");
    fs::write(&test, "content").unwrap();
    let old = FileTime::from_unix_time(1_000_000, 0);
    filetime::set_file_times(&test, old, old).unwrap();

    use_case().execute(&[&test, &test]).unwrap();

    let metadata = fs::metadata(&test).unwrap();
    assert!(metadata.is_file());
    assert!(FileTime::from_last_modification_time(&metadata) > old);
    assert_eq!(fs::read_to_string(&test).unwrap(), "content");
}

#[test]
fn test_multiple_errors_in_input_order() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let a = root.join("foo").join("bar");
    let b = root.join("foo").join("bar").join("baz");
    let c = root.join("1").join("2");
    let d = root.join("1").join("2").join("3");

    let err = use_case().execute(&[&a, &b, &c, &d]).unwrap_err();

    let paths: Vec<&Path> = err.paths().collect();
    assert_eq!(paths, vec![b.as_path(), d.as_path()]);
    let message = err.to_string();
    assert!(message.starts_with("failed to touch files: "));
    let b_at = message.find(&format!("[{}: ", b.display())).unwrap();
    let d_at = message.find(&format!("[{}: ", d.display())).unwrap();
    assert!(b_at < d_at);
    assert!(a.is_file());
    assert!(c.is_file());
}

#[test]
fn test_successful_paths_survive_later_failure() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("dir");
    fs::create_dir(&dir).unwrap();
    let files: Vec<PathBuf> = (0..3).map(|i| temp_dir.path().join(format!("f{i}"))).collect();

    let mut inputs = files.clone();
    inputs.insert(1, dir.clone());
    let err = use_case().execute(&inputs).unwrap_err();

    assert_eq!(err.len(), 1);
    assert!(dir.is_dir());
    for file in &files {
        assert!(file.is_file());
    }
}

#[cfg(target_os = "linux")]
#[test]
fn test_open_error_is_reported_with_os_message() {
    let temp_dir = TempDir::new().unwrap();
    let link = temp_dir.path().join("loop");
    std::os::unix::fs::symlink(&link, &link).unwrap();
    let ok = temp_dir.path().join("ok");

    let err = use_case().execute(&[&link, &ok]).unwrap_err();

    assert!(matches!(err.failures()[0].error(), TouchError::Open(_)));
    assert_eq!(
        err.to_string(),
        format!(
            "failed to touch file: [{}: Too many levels of symbolic links (os error 40)]",
            link.display()
        )
    );
    assert!(ok.is_file());
}
