//! Tests for the rename command.

use super::*;
use std::fs;
use tempfile::TempDir;

fn setup_dir(files: &[&str]) -> TempDir {
    let tmp = tempfile::tempdir().unwrap();
    for name in files {
        fs::write(tmp.path().join(name), name.as_bytes()).unwrap();
    }
    tmp
}

fn apply(dir: &Path, file_name: &str) -> RenameOutcome {
    rename_one(dir, file_name, NoteMap::standard(), RenameMode::Apply)
}

#[test]
fn test_list_candidates_filters_extension() {
    let tmp = setup_dir(&[
        "harmonium-c2.wav",
        "harmonium-d2.WAV",
        "harmonium-e2.wav.bak",
        "notes.txt",
        "other.wav",
    ]);

    let names = list_candidates(tmp.path()).unwrap();
    assert_eq!(names, vec!["harmonium-c2.wav", "other.wav"]);
}

#[test]
fn test_list_candidates_does_not_recurse() {
    let tmp = setup_dir(&["harmonium-c2.wav"]);
    let nested = tmp.path().join("nested");
    fs::create_dir(&nested).unwrap();
    fs::write(nested.join("harmonium-d2.wav"), b"").unwrap();

    let names = list_candidates(tmp.path()).unwrap();
    assert_eq!(names, vec!["harmonium-c2.wav"]);
}

#[test]
fn test_list_candidates_missing_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("missing");

    let err = list_candidates(&missing).unwrap_err();
    assert!(err.to_string().contains("not a directory"));
}

#[test]
fn test_rename_one_renames_lowercase_note() {
    let tmp = setup_dir(&["harmonium-c2.wav"]);

    let outcome = apply(tmp.path(), "harmonium-c2.wav");

    assert_eq!(
        outcome,
        RenameOutcome::Renamed {
            from: "harmonium-c2.wav".to_string(),
            to: "harmonium-C2.wav".to_string(),
        }
    );
    assert!(tmp.path().join("harmonium-C2.wav").exists());
    assert!(!tmp.path().join("harmonium-c2.wav").exists());
}

#[test]
fn test_rename_one_keeps_contents() {
    let tmp = setup_dir(&["Harmonium-G3-soft.wav"]);

    apply(tmp.path(), "Harmonium-G3-soft.wav");

    let contents = fs::read(tmp.path().join("harmonium-G3.wav")).unwrap();
    assert_eq!(contents, b"Harmonium-G3-soft.wav");
}

#[test]
fn test_rename_one_unparseable() {
    let tmp = setup_dir(&["harmonium-x9.wav"]);

    let outcome = apply(tmp.path(), "harmonium-x9.wav");

    assert_eq!(outcome.skip_reason(), Some(&SkipReason::Unparseable));
    assert!(tmp.path().join("harmonium-x9.wav").exists());
}

#[test]
fn test_rename_one_unknown_note() {
    let tmp = setup_dir(&["harmonium-c#3.wav", "harmonium-c6.wav"]);

    for (file, token) in [("harmonium-c#3.wav", "c#3"), ("harmonium-c6.wav", "c6")] {
        let outcome = apply(tmp.path(), file);
        assert_eq!(
            outcome,
            RenameOutcome::Skipped {
                file: file.to_string(),
                reason: SkipReason::UnknownNote {
                    token: token.to_string()
                },
            }
        );
        assert!(tmp.path().join(file).exists());
    }
}

#[test]
fn test_rename_one_custom_map_accepts_sharps() {
    let tmp = setup_dir(&["harmonium-c#3.wav"]);
    let notes = NoteMap::from_entries([("c#3", "C#3")]);

    let outcome = rename_one(tmp.path(), "harmonium-c#3.wav", &notes, RenameMode::Apply);

    assert!(matches!(outcome, RenameOutcome::Renamed { .. }));
    assert!(tmp.path().join("harmonium-C#3.wav").exists());
}

#[test]
fn test_rename_one_target_exists() {
    let tmp = setup_dir(&["harmonium-c2.wav", "harmonium-C2.wav"]);

    let outcome = apply(tmp.path(), "harmonium-c2.wav");

    assert_eq!(
        outcome.skip_reason(),
        Some(&SkipReason::AlreadyExists {
            target: "harmonium-C2.wav".to_string()
        })
    );
    assert_eq!(
        fs::read(tmp.path().join("harmonium-C2.wav")).unwrap(),
        b"harmonium-C2.wav"
    );
    assert!(tmp.path().join("harmonium-c2.wav").exists());
}

#[test]
fn test_rename_one_canonical_name_is_skipped() {
    let tmp = setup_dir(&["harmonium-D5.wav"]);

    let outcome = apply(tmp.path(), "harmonium-D5.wav");

    assert!(matches!(
        outcome.skip_reason(),
        Some(SkipReason::AlreadyExists { .. })
    ));
}

#[test]
fn test_rename_one_reports_failure() {
    // Listed but gone by the time it is renamed.
    let tmp = setup_dir(&[]);

    let outcome = apply(tmp.path(), "harmonium-e3.wav");

    match outcome {
        RenameOutcome::Failed { file, to, message } => {
            assert_eq!(file, "harmonium-e3.wav");
            assert_eq!(to, "harmonium-E3.wav");
            assert!(!message.is_empty());
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn test_rename_one_dry_run_leaves_file() {
    let tmp = setup_dir(&["harmonium-b4.wav"]);

    let outcome = rename_one(
        tmp.path(),
        "harmonium-b4.wav",
        NoteMap::standard(),
        RenameMode::DryRun,
    );

    assert_eq!(
        outcome,
        RenameOutcome::WouldRename {
            from: "harmonium-b4.wav".to_string(),
            to: "harmonium-B4.wav".to_string(),
        }
    );
    assert!(tmp.path().join("harmonium-b4.wav").exists());
    assert!(!tmp.path().join("harmonium-B4.wav").exists());
}

#[test]
fn test_batch_summary_counts() {
    let outcomes = vec![
        RenameOutcome::Renamed {
            from: "a".to_string(),
            to: "b".to_string(),
        },
        RenameOutcome::Skipped {
            file: "c".to_string(),
            reason: SkipReason::Unparseable,
        },
        RenameOutcome::Skipped {
            file: "d".to_string(),
            reason: SkipReason::UnknownNote {
                token: "c6".to_string(),
            },
        },
        RenameOutcome::Failed {
            file: "e".to_string(),
            to: "f".to_string(),
            message: "denied".to_string(),
        },
    ];

    let summary = BatchSummary::from_outcomes(&outcomes);
    assert_eq!(
        summary,
        BatchSummary {
            total: 4,
            renamed: 1,
            would_rename: 0,
            skipped: 2,
            failed: 1,
        }
    );
    assert_eq!(outcomes[3].file(), "e");
}

#[test]
fn test_run_missing_dir_is_error() {
    let tmp = tempfile::tempdir().unwrap();
    let options = RenameOptions {
        dir: tmp.path().join("missing"),
        mode: RenameMode::Apply,
        json: false,
    };

    assert!(run(&options).is_err());
}

#[test]
fn test_run_missing_dir_json_exits_nonzero() {
    let tmp = tempfile::tempdir().unwrap();
    let options = RenameOptions {
        dir: tmp.path().join("missing"),
        mode: RenameMode::Apply,
        json: true,
    };

    let code = run(&options).unwrap();
    assert_eq!(format!("{:?}", code), format!("{:?}", ExitCode::from(1)));
}

#[cfg(target_os = "linux")]
#[test]
fn test_list_candidates_keeps_non_utf8_names() {
    use std::os::unix::ffi::OsStrExt;

    let tmp = setup_dir(&["harmonium-d2.wav"]);
    let raw = std::ffi::OsStr::from_bytes(b"harmonium-c2\xff.wav");
    fs::write(tmp.path().join(raw), b"").unwrap();
    fs::write(tmp.path().join(std::ffi::OsStr::from_bytes(b"\xffnotes.txt")), b"").unwrap();

    let names = list_candidates(tmp.path()).unwrap();
    assert_eq!(names.len(), 2);
    assert!(names.iter().any(|n| n.as_os_str() == raw));
}

#[cfg(target_os = "linux")]
#[test]
fn test_rename_one_non_utf8_name() {
    use std::os::unix::ffi::OsStrExt;

    let tmp = setup_dir(&[]);
    let raw = std::ffi::OsStr::from_bytes(b"harmonium-c2\xff.wav");
    fs::write(tmp.path().join(raw), b"raw").unwrap();

    let outcome = apply_os(tmp.path(), raw);

    assert_eq!(
        outcome,
        RenameOutcome::Renamed {
            from: "harmonium-c2\u{FFFD}.wav".to_string(),
            to: "harmonium-C2.wav".to_string(),
        }
    );
    assert!(!tmp.path().join(raw).exists());
    assert_eq!(fs::read(tmp.path().join("harmonium-C2.wav")).unwrap(), b"raw");
}

#[cfg(target_os = "linux")]
fn apply_os(dir: &Path, file_name: &std::ffi::OsStr) -> RenameOutcome {
    rename_one(dir, file_name, NoteMap::standard(), RenameMode::Apply)
}
