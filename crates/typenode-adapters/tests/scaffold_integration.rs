//! End-to-end orchestrator tests over the in-memory filesystem.

use std::path::{Path, PathBuf};

use typenode_adapters::{MemoryFilesystem, RecordingInstaller, ScriptedPrompt};
use typenode_core::{
    application::{
        ScaffoldOptions, ScaffoldOutcome, ScaffoldService, ScaffoldWarning,
        ports::Filesystem as _,
    },
    domain::{DirectoryState, RenamePlan, TargetLocation},
    error::ScaffoldError,
};

const TEMPLATE: &str = "/template";
const WORK: &str = "/work";

const PACKAGE_JSON: &str = r#"{
  "name": "create-typenode",
  "version": "1.0.0",
  "scripts": {
    "dev": "tsx watch src/app.ts",
    "build": "tsc",
    "start": "node dist/app.bundle.js"
  }
}
"#;

fn seed_template(fs: &MemoryFilesystem) {
    fs.seed_file(format!("{TEMPLATE}/a.txt"), "alpha\n");
    fs.seed_file(format!("{TEMPLATE}/sub/b.txt"), "beta\n");
    fs.seed_file(format!("{TEMPLATE}/package.json"), PACKAGE_JSON);
    fs.seed_file(format!("{TEMPLATE}/gitignore"), "node_modules\ndist\n");
}

fn options() -> ScaffoldOptions {
    ScaffoldOptions {
        template_root: PathBuf::from(TEMPLATE),
        assume_yes: false,
        skip_install: false,
    }
}

fn service(
    fs: &MemoryFilesystem,
    prompt: ScriptedPrompt,
    installer: RecordingInstaller,
) -> ScaffoldService {
    ScaffoldService::new(Box::new(fs.clone()), Box::new(prompt), Box::new(installer))
}

// ── new-directory scenario ────────────────────────────────────────────────────

#[test]
fn scaffold_into_new_directory_copies_full_tree() {
    let fs = MemoryFilesystem::new();
    seed_template(&fs);
    fs.seed_dir(WORK);

    let svc = service(&fs, ScriptedPrompt::closed(), RecordingInstaller::new());
    let target = TargetLocation::resolve("proj", Path::new(WORK)).unwrap();
    let outcome = svc.scaffold(&target, &options()).unwrap();

    let ScaffoldOutcome::Created(report) = outcome else {
        panic!("expected created outcome");
    };
    assert_eq!(report.state, DirectoryState::Absent);
    assert!(report.warnings.is_empty());

    assert_eq!(fs.read_file(Path::new("/work/proj/a.txt")).unwrap(), "alpha\n");
    assert_eq!(fs.read_file(Path::new("/work/proj/sub/b.txt")).unwrap(), "beta\n");
    assert!(fs.exists(Path::new("/work/proj/package.json")));
}

#[test]
fn package_json_substitution_touches_only_the_name() {
    let fs = MemoryFilesystem::new();
    seed_template(&fs);
    fs.seed_dir(WORK);

    let svc = service(&fs, ScriptedPrompt::closed(), RecordingInstaller::new());
    let target = TargetLocation::resolve("my-app", Path::new(WORK)).unwrap();
    svc.scaffold(&target, &options()).unwrap();

    let rendered = fs.read_file(Path::new("/work/my-app/package.json")).unwrap();
    let before: serde_json::Value = serde_json::from_str(PACKAGE_JSON).unwrap();
    let after: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(after["name"], "my-app");
    assert_eq!(after["version"], before["version"]);
    assert_eq!(after["scripts"], before["scripts"]);
}

#[test]
fn gitignore_placeholder_is_renamed() {
    let fs = MemoryFilesystem::new();
    seed_template(&fs);
    fs.seed_dir(WORK);

    let svc = service(&fs, ScriptedPrompt::closed(), RecordingInstaller::new());
    let target = TargetLocation::resolve("proj", Path::new(WORK)).unwrap();
    svc.scaffold(&target, &options()).unwrap();

    assert!(!fs.exists(Path::new("/work/proj/gitignore")));
    assert_eq!(
        fs.read_file(Path::new("/work/proj/.gitignore")).unwrap(),
        "node_modules\ndist\n"
    );
}

#[test]
fn installer_receives_the_target_path() {
    let fs = MemoryFilesystem::new();
    seed_template(&fs);
    fs.seed_dir(WORK);

    let installer = RecordingInstaller::new();
    let svc = service(&fs, ScriptedPrompt::closed(), installer.clone());
    let target = TargetLocation::resolve("proj", Path::new(WORK)).unwrap();
    svc.scaffold(&target, &options()).unwrap();

    assert_eq!(installer.calls(), vec![PathBuf::from("/work/proj")]);
}

#[test]
fn skip_install_never_calls_the_installer() {
    let fs = MemoryFilesystem::new();
    seed_template(&fs);
    fs.seed_dir(WORK);

    let svc = service(
        &fs,
        ScriptedPrompt::closed(),
        RecordingInstaller::failing("should never run"),
    );
    let target = TargetLocation::resolve("proj", Path::new(WORK)).unwrap();
    let mut opts = options();
    opts.skip_install = true;

    let ScaffoldOutcome::Created(report) = svc.scaffold(&target, &opts).unwrap() else {
        panic!("expected created outcome");
    };
    assert!(report.warnings.is_empty());
}

#[test]
fn install_failure_is_soft_and_reported() {
    let fs = MemoryFilesystem::new();
    seed_template(&fs);
    fs.seed_dir(WORK);

    let svc = service(
        &fs,
        ScriptedPrompt::closed(),
        RecordingInstaller::failing("npm install exited with exit status: 1"),
    );
    let target = TargetLocation::resolve("proj", Path::new(WORK)).unwrap();
    let ScaffoldOutcome::Created(report) = svc.scaffold(&target, &options()).unwrap() else {
        panic!("expected created outcome");
    };

    assert_eq!(report.warnings.len(), 1);
    let ScaffoldWarning::Install { reason } = &report.warnings[0] else {
        panic!("expected an install warning");
    };
    assert!(reason.contains("npm install"));
    // The project itself is intact.
    assert!(fs.exists(Path::new("/work/proj/package.json")));
}

// ── conflict scenario ─────────────────────────────────────────────────────────

#[test]
fn existing_target_directory_is_a_conflict_and_is_preserved() {
    let fs = MemoryFilesystem::new();
    seed_template(&fs);
    fs.seed_file("/work/proj/precious.txt", "keep me");

    let svc = service(&fs, ScriptedPrompt::closed(), RecordingInstaller::new());
    let target = TargetLocation::resolve("proj", Path::new(WORK)).unwrap();
    let err = svc.scaffold(&target, &options()).unwrap_err();

    assert!(matches!(err, ScaffoldError::Application(_)));
    assert_eq!(
        fs.read_file(Path::new("/work/proj/precious.txt")).unwrap(),
        "keep me"
    );
    assert!(!fs.exists(Path::new("/work/proj/a.txt")));
}

// ── rollback ──────────────────────────────────────────────────────────────────

#[test]
fn copy_failure_rolls_back_a_freshly_created_directory() {
    let fs = MemoryFilesystem::new();
    seed_template(&fs);
    fs.seed_dir(WORK);
    fs.fail_writes_under("/work/proj/sub");

    let svc = service(&fs, ScriptedPrompt::closed(), RecordingInstaller::new());
    let target = TargetLocation::resolve("proj", Path::new(WORK)).unwrap();
    let err = svc.scaffold(&target, &options()).unwrap_err();

    assert!(matches!(err, ScaffoldError::Application(_)));
    // Rollback removed the whole created directory, including the files
    // written before the failure.
    assert!(!fs.exists(Path::new("/work/proj")));
    assert!(fs.list_files().iter().all(|p| !p.starts_with("/work/proj")));
}

#[test]
fn copy_failure_in_current_directory_does_not_delete_anything() {
    let fs = MemoryFilesystem::new();
    seed_template(&fs);
    fs.seed_file("/work/mine/notes.txt", "mine");
    fs.fail_writes_under("/work/mine/sub");

    // Confirm "yes" to scaffold into the non-empty directory.
    let svc = service(&fs, ScriptedPrompt::new(["y"]), RecordingInstaller::new());
    let target = TargetLocation::resolve(".", Path::new("/work/mine")).unwrap();
    let err = svc.scaffold(&target, &options()).unwrap_err();

    assert!(matches!(err, ScaffoldError::Application(_)));
    // The user's directory survives, partially-written files and all.
    assert_eq!(fs.read_file(Path::new("/work/mine/notes.txt")).unwrap(), "mine");
}

// ── current-directory scenarios ───────────────────────────────────────────────

#[test]
fn declining_the_confirmation_writes_nothing() {
    let fs = MemoryFilesystem::new();
    seed_template(&fs);
    fs.seed_file("/work/mine/notes.txt", "mine");

    let svc = service(&fs, ScriptedPrompt::new(["n"]), RecordingInstaller::new());
    let target = TargetLocation::resolve(".", Path::new("/work/mine")).unwrap();
    let outcome = svc.scaffold(&target, &options()).unwrap();

    assert_eq!(outcome, ScaffoldOutcome::Cancelled);
    assert!(!fs.exists(Path::new("/work/mine/a.txt")));
    assert!(!fs.exists(Path::new("/work/mine/package.json")));
}

#[test]
fn tolerated_entries_do_not_trigger_the_confirmation() {
    let fs = MemoryFilesystem::new();
    seed_template(&fs);
    fs.seed_file("/work/mine/README.md", "# readme");
    fs.seed_file("/work/mine/.env", "SECRET=1");
    fs.seed_dir("/work/mine/node_modules");

    // A closed prompt would fail if the service asked anything.
    let svc = service(&fs, ScriptedPrompt::closed(), RecordingInstaller::new());
    let target = TargetLocation::resolve(".", Path::new("/work/mine")).unwrap();
    let ScaffoldOutcome::Created(report) = svc.scaffold(&target, &options()).unwrap() else {
        panic!("expected created outcome");
    };

    assert_eq!(report.state, DirectoryState::CurrentEmpty);
    assert!(fs.exists(Path::new("/work/mine/a.txt")));
}

#[test]
fn current_directory_name_is_substituted_into_package_json() {
    let fs = MemoryFilesystem::new();
    seed_template(&fs);
    fs.seed_dir("/work/cool-project");

    let svc = service(&fs, ScriptedPrompt::closed(), RecordingInstaller::new());
    let target = TargetLocation::resolve(".", Path::new("/work/cool-project")).unwrap();
    svc.scaffold(&target, &options()).unwrap();

    let rendered = fs
        .read_file(Path::new("/work/cool-project/package.json"))
        .unwrap();
    assert!(rendered.contains("\"name\": \"cool-project\""));
}

#[test]
fn assume_yes_skips_the_confirmation() {
    let fs = MemoryFilesystem::new();
    seed_template(&fs);
    fs.seed_file("/work/mine/notes.txt", "mine");

    let svc = service(&fs, ScriptedPrompt::closed(), RecordingInstaller::new());
    let target = TargetLocation::resolve(".", Path::new("/work/mine")).unwrap();
    let mut opts = options();
    opts.assume_yes = true;

    let ScaffoldOutcome::Created(report) = svc.scaffold(&target, &opts).unwrap() else {
        panic!("expected created outcome");
    };
    assert_eq!(report.state, DirectoryState::CurrentNonEmpty);
    assert!(fs.exists(Path::new("/work/mine/a.txt")));
}

// ── normalization idempotence ─────────────────────────────────────────────────

#[test]
fn normalize_twice_yields_the_same_file_set_as_once() {
    let fs = MemoryFilesystem::new();
    fs.seed_file("/work/app/gitignore", "dist\n");
    fs.seed_file("/work/app/a.txt", "alpha\n");

    let svc = service(&fs, ScriptedPrompt::closed(), RecordingInstaller::new());
    let root = Path::new("/work/app");
    let plan = RenamePlan::builtin();

    assert!(svc.normalize(root, &plan).is_empty());
    let first = fs.list_files();

    assert!(svc.normalize(root, &plan).is_empty());
    let second = fs.list_files();

    assert_eq!(first, second);
    assert!(fs.exists(Path::new("/work/app/.gitignore")));
    assert!(!fs.exists(Path::new("/work/app/gitignore")));
}

#[test]
fn normalize_skips_when_the_real_name_already_exists() {
    let fs = MemoryFilesystem::new();
    fs.seed_file("/work/app/gitignore", "placeholder\n");
    fs.seed_file("/work/app/.gitignore", "real\n");

    let svc = service(&fs, ScriptedPrompt::closed(), RecordingInstaller::new());
    assert!(svc.normalize(Path::new("/work/app"), &RenamePlan::builtin()).is_empty());

    // Neither file was touched.
    assert_eq!(fs.read_file(Path::new("/work/app/.gitignore")).unwrap(), "real\n");
    assert_eq!(
        fs.read_file(Path::new("/work/app/gitignore")).unwrap(),
        "placeholder\n"
    );
}

#[test]
fn missing_template_fails_before_any_write() {
    let fs = MemoryFilesystem::new();
    fs.seed_dir(WORK);

    let svc = service(&fs, ScriptedPrompt::closed(), RecordingInstaller::new());
    let target = TargetLocation::resolve("proj", Path::new(WORK)).unwrap();
    let err = svc.scaffold(&target, &options()).unwrap_err();

    assert!(matches!(err, ScaffoldError::Application(_)));
    assert!(!fs.exists(Path::new("/work/proj")));
}

#[test]
fn rename_plan_default_is_the_gitignore_pair() {
    let plan = RenamePlan::default();
    assert_eq!(plan.pairs().len(), 1);
    assert_eq!(plan.pairs()[0].from, "gitignore");
}
